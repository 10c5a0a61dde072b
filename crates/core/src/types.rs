//! Core cart types.
//!
//! A [`LineItem`] is a *snapshot*: display fields are copied from the
//! catalog at the moment the item is first added and are never refreshed
//! by later cart operations. A stale price in the cart is by design; the
//! checkout flow re-prices against the catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog item identifier.
///
/// Newtype over `i64` so item ids cannot be mixed up with quantities or
/// other numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    /// Create a new item ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying i64 value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ItemId> for i64 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

/// One catalog item held in the cart: a quantity plus a snapshot of the
/// catalog's display fields.
///
/// Serialized in camelCase to match the catalog wire format. Optional
/// display fields tolerate both `null` and omission when decoding older
/// cookie payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Catalog-assigned item id; unique within a cart.
    pub id: ItemId,
    /// Number of units. Increments saturate rather than overflow.
    pub quantity: u32,
    /// Item title as shown at the time of adding.
    pub title: String,
    /// Short marketing blurb, if the catalog provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sell_point: Option<String>,
    /// Unit price at the time of adding.
    pub price: Decimal,
    /// Primary image URL. The catalog may return a comma-separated list;
    /// only the first entry is stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_display_and_conversions() {
        let id = ItemId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.as_i64(), 42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(ItemId::from(42), id);
    }

    #[test]
    fn test_item_id_serializes_transparently() {
        let json = serde_json::to_string(&ItemId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn test_line_item_tolerates_missing_optional_fields() {
        let item: LineItem =
            serde_json::from_str(r#"{"id":1,"quantity":2,"title":"Widget","price":"9.99"}"#)
                .unwrap();
        assert_eq!(item.id, ItemId::new(1));
        assert_eq!(item.quantity, 2);
        assert!(item.sell_point.is_none());
        assert!(item.image.is_none());
    }

    #[test]
    fn test_line_item_tolerates_null_optional_fields() {
        let item: LineItem = serde_json::from_str(
            r#"{"id":1,"quantity":1,"title":"Widget","sellPoint":null,"price":"1.50","image":null}"#,
        )
        .unwrap();
        assert!(item.sell_point.is_none());
        assert!(item.image.is_none());
    }
}
