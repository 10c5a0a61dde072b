//! Cart route handlers.
//!
//! Each request runs the same state machine: load the cart from the
//! request cookie, mutate it in memory, re-encode it, and emit the new
//! cookie. Handlers hold no state between requests.

// Handlers stay async per axum's contract even when they never await.
#![allow(clippy::unused_async)]

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, header},
    response::{AppendHeaders, IntoResponse, Redirect},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use cartwheel_core::{Cart, ItemId, LineItem};

use crate::cookie::{load_cart, set_cart_cookie};
use crate::error::Result;
use crate::state::AppState;

/// Cart item display data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemView {
    pub id: ItemId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sell_point: Option<String>,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

/// Format a decimal amount as a price string.
fn format_price(amount: Decimal) -> String {
    format!("${amount:.2}")
}

impl From<&LineItem> for CartItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            sell_point: item.sell_point.clone(),
            quantity: item.quantity,
            price: format_price(item.price),
            line_price: format_price(item.price * Decimal::from(item.quantity)),
            image: item.image.clone(),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let subtotal = cart
            .items()
            .iter()
            .map(|item| item.price * Decimal::from(item.quantity))
            .sum();

        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            subtotal: format_price(subtotal),
            item_count: cart.total_quantity(),
        }
    }
}

/// Generic success body for mutations that have no page to show.
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub status: u16,
    pub msg: &'static str,
}

impl OkResponse {
    const fn ok() -> Self {
        Self {
            status: 200,
            msg: "OK",
        }
    }
}

/// Cart count badge body.
#[derive(Debug, Serialize)]
pub struct CartCount {
    pub count: u32,
}

/// Add-to-cart query parameters.
#[derive(Debug, Deserialize)]
pub struct AddToCartParams {
    pub quantity: Option<u32>,
}

/// Display cart contents.
///
/// Pure read: decodes the cookie and returns the cart view without
/// re-persisting anything.
#[instrument(skip(state, headers))]
pub async fn show(State(state): State<AppState>, headers: HeaderMap) -> Json<CartView> {
    let cart = load_cart(&headers, state.config());
    Json(CartView::from(&cart))
}

/// Get the cart's total quantity.
#[instrument(skip(state, headers))]
pub async fn count(State(state): State<AppState>, headers: HeaderMap) -> Json<CartCount> {
    let cart = load_cart(&headers, state.config());
    Json(CartCount {
        count: cart.total_quantity(),
    })
}

/// Add an item to the cart.
///
/// If the item is already in the cart its quantity is incremented
/// (saturating); otherwise the catalog is consulted for a display
/// snapshot and a new line is appended. A failed lookup leaves the cookie
/// untouched. Deliberately not idempotent: adding quantity 1 twice yields
/// quantity 2.
#[instrument(skip(state, headers))]
pub async fn add(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
    Query(params): Query<AddToCartParams>,
    headers: HeaderMap,
) -> Result<impl IntoResponse> {
    let id = ItemId::new(item_id);
    let quantity = params.quantity.unwrap_or(1);
    info!(item_id = %id, quantity, "Adding item to cart");

    let mut cart = load_cart(&headers, state.config());
    if !cart.increment(id, quantity) {
        // Brand-new item: snapshot display fields from the catalog. A
        // lookup failure propagates before any cookie write happens.
        let details = state.catalog().item_by_id(id).await?;
        cart.insert(details.into_line_item(quantity));
    }

    let set_cookie = set_cart_cookie(&cart, state.config());
    Ok((
        AppendHeaders([(header::SET_COOKIE, set_cookie)]),
        Redirect::to("/cart"),
    ))
}

/// Overwrite the quantity of a cart entry.
///
/// A missing item id is a silent no-op so retried requests stay safe; the
/// cart is re-persisted either way.
#[instrument(skip(state, headers))]
pub async fn update(
    State(state): State<AppState>,
    Path((item_id, quantity)): Path<(i64, u32)>,
    headers: HeaderMap,
) -> Result<impl IntoResponse> {
    let id = ItemId::new(item_id);
    info!(item_id = %id, quantity, "Updating cart item quantity");

    let mut cart = load_cart(&headers, state.config());
    if !cart.set_quantity(id, quantity) {
        info!(item_id = %id, "Item not in cart, update is a no-op");
    }

    let set_cookie = set_cart_cookie(&cart, state.config());
    Ok((
        AppendHeaders([(header::SET_COOKIE, set_cookie)]),
        Json(OkResponse::ok()),
    ))
}

/// Remove an item from the cart.
///
/// A missing item id is a silent no-op; the cart is re-persisted either
/// way.
#[instrument(skip(state, headers))]
pub async fn delete(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
    headers: HeaderMap,
) -> Result<impl IntoResponse> {
    let id = ItemId::new(item_id);
    info!(item_id = %id, "Removing item from cart");

    let mut cart = load_cart(&headers, state.config());
    if !cart.remove(id) {
        info!(item_id = %id, "Item not in cart, delete is a no-op");
    }

    let set_cookie = set_cart_cookie(&cart, state.config());
    Ok((
        AppendHeaders([(header::SET_COOKIE, set_cookie)]),
        Redirect::to("/cart"),
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line_item(id: i64, quantity: u32, price_cents: i64) -> LineItem {
        LineItem {
            id: ItemId::new(id),
            quantity,
            title: format!("Item {id}"),
            sell_point: None,
            price: Decimal::new(price_cents, 2),
            image: None,
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Decimal::new(1250, 2)), "$12.50");
        assert_eq!(format_price(Decimal::new(900, 2)), "$9.00");
        assert_eq!(format_price(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_cart_view_subtotal_and_count() {
        let cart: Cart = vec![line_item(1, 2, 1000), line_item(2, 1, 550)]
            .into_iter()
            .collect();
        let view = CartView::from(&cart);

        assert_eq!(view.items.len(), 2);
        assert_eq!(view.item_count, 3);
        assert_eq!(view.subtotal, "$25.50");
        assert_eq!(view.items.first().unwrap().line_price, "$20.00");
    }

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::from(&Cart::new());
        assert!(view.items.is_empty());
        assert_eq!(view.item_count, 0);
        assert_eq!(view.subtotal, "$0.00");
    }
}
