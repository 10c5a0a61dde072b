//! Item catalog client.
//!
//! The cart only ever needs one thing from the catalog: item details by
//! id, fetched once when an item is first added. That narrow contract is
//! the [`Catalog`] trait, so the host can inject the HTTP client, an
//! in-memory fixture for tests, or anything else without touching the
//! cart logic.
//!
//! [`HttpCatalog`] is the production implementation: plain JSON REST via
//! `reqwest`, with responses cached in-memory using `moka` (5-minute TTL).

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use cartwheel_core::{ItemId, LineItem};

/// Errors that can occur when looking up catalog items.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid item JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog has no item with the requested id.
    #[error("Item not found: {0}")]
    NotFound(ItemId),
}

/// Item details as served by the catalog.
///
/// `image` may hold a comma-separated list of URLs; the cart keeps only
/// the first one (see [`ItemDetails::into_line_item`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetails {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub sell_point: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub image: Option<String>,
}

impl ItemDetails {
    /// Build the cart line item for this catalog entry.
    ///
    /// Snapshots the display fields and reduces `image` to the first
    /// comma-separated segment; blank image fields stay empty.
    #[must_use]
    pub fn into_line_item(self, quantity: u32) -> LineItem {
        let image = self
            .image
            .as_deref()
            .map(str::trim)
            .filter(|image| !image.is_empty())
            .map(|image| image.split(',').next().unwrap_or(image).to_string());

        LineItem {
            id: self.id,
            quantity,
            title: self.title,
            sell_point: self.sell_point,
            price: self.price,
            image,
        }
    }
}

/// The item lookup capability the cart operations depend on.
#[async_trait::async_trait]
pub trait Catalog: Send + Sync {
    /// Fetch item details by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when the catalog has no such id,
    /// or a transport error when the lookup itself fails.
    async fn item_by_id(&self, id: ItemId) -> Result<ItemDetails, CatalogError>;
}

/// A shared, dynamically dispatched catalog.
pub type DynCatalog = Arc<dyn Catalog>;

// =============================================================================
// HttpCatalog
// =============================================================================

/// HTTP client for the item catalog service.
///
/// Fetches `GET {base_url}/items/{id}` and caches results for 5 minutes.
#[derive(Clone)]
pub struct HttpCatalog {
    inner: Arc<HttpCatalogInner>,
}

struct HttpCatalogInner {
    client: reqwest::Client,
    base_url: String,
    cache: Cache<ItemId, ItemDetails>,
}

impl HttpCatalog {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(HttpCatalogInner {
                client: reqwest::Client::new(),
                base_url: base_url.trim_end_matches('/').to_string(),
                cache,
            }),
        }
    }
}

#[async_trait::async_trait]
impl Catalog for HttpCatalog {
    #[instrument(skip(self), fields(item_id = %id))]
    async fn item_by_id(&self, id: ItemId) -> Result<ItemDetails, CatalogError> {
        // Check cache
        if let Some(details) = self.inner.cache.get(&id).await {
            debug!("Cache hit for item");
            return Ok(details);
        }

        let url = format!("{}/items/{id}", self.inner.base_url);
        let response = self.inner.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(id));
        }
        let response = response.error_for_status()?;

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;
        let details: ItemDetails = match serde_json::from_str(&response_text) {
            Ok(details) => details,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse catalog response"
                );
                return Err(CatalogError::Parse(e));
            }
        };

        // Cache the result
        self.inner.cache.insert(id, details.clone()).await;

        Ok(details)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn details(image: Option<&str>) -> ItemDetails {
        ItemDetails {
            id: ItemId::new(7),
            title: "Widget".to_string(),
            sell_point: Some("Does widget things".to_string()),
            price: Decimal::new(1999, 2),
            image: image.map(str::to_string),
        }
    }

    #[test]
    fn test_into_line_item_keeps_first_image() {
        let item = details(Some("a.jpg,b.jpg,c.jpg")).into_line_item(1);
        assert_eq!(item.image.as_deref(), Some("a.jpg"));
        assert_eq!(item.quantity, 1);
        assert_eq!(item.id, ItemId::new(7));
    }

    #[test]
    fn test_into_line_item_single_image_untouched() {
        let item = details(Some("only.jpg")).into_line_item(2);
        assert_eq!(item.image.as_deref(), Some("only.jpg"));
    }

    #[test]
    fn test_into_line_item_blank_image_stays_empty() {
        assert!(details(Some("")).into_line_item(1).image.is_none());
        assert!(details(Some("   ")).into_line_item(1).image.is_none());
        assert!(details(None).into_line_item(1).image.is_none());
    }

    #[test]
    fn test_into_line_item_snapshots_display_fields() {
        let item = details(Some("a.jpg")).into_line_item(3);
        assert_eq!(item.title, "Widget");
        assert_eq!(item.sell_point.as_deref(), Some("Does widget things"));
        assert_eq!(item.price, Decimal::new(1999, 2));
    }

    #[test]
    fn test_item_details_decodes_camel_case() {
        let details: ItemDetails = serde_json::from_str(
            r#"{"id":7,"title":"Widget","sellPoint":"Blurb","price":"19.99","image":"a.jpg,b.jpg"}"#,
        )
        .unwrap();
        assert_eq!(details.id, ItemId::new(7));
        assert_eq!(details.sell_point.as_deref(), Some("Blurb"));
    }

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::NotFound(ItemId::new(123));
        assert_eq!(err.to_string(), "Item not found: 123");
    }
}
