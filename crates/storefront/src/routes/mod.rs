//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                        - Health check
//!
//! # Cart
//! GET  /cart                          - Cart contents (JSON)
//! GET  /cart/count                    - Total quantity badge (JSON)
//! POST /cart/add/{item_id}?quantity=n - Add item (redirects to /cart)
//! POST /cart/update/{item_id}/{quantity} - Overwrite quantity (JSON ok)
//! POST /cart/delete/{item_id}         - Remove item (redirects to /cart)
//! ```
//!
//! Every mutating cart route re-persists the full cart through the
//! `Set-Cookie` header it emits; the cookie is the only store.

pub mod cart;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/count", get(cart::count))
        .route("/add/{item_id}", post(cart::add))
        .route("/update/{item_id}/{quantity}", post(cart::update))
        .route("/delete/{item_id}", post(cart::delete))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new().nest("/cart", cart_routes())
}
