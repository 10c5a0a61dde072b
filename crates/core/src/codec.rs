//! Cookie codec: the lossless mapping between a [`Cart`] and a
//! cookie-safe string.
//!
//! The wire format is a UTF-8 JSON array of line items, percent-encoded
//! so the value survives the cookie transport untouched. Decoding an
//! absent or blank value yields an empty cart and never fails; a present
//! but malformed value is a [`CodecError`], and the caller decides whether
//! that means a failed request or a fresh cart (the storefront resets to
//! an empty cart and logs a warning).

use thiserror::Error;

use crate::cart::Cart;
use crate::types::LineItem;

/// Errors from decoding a cookie value into a cart.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The value was not valid percent-encoded UTF-8.
    #[error("invalid percent-encoding: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// The decoded value was not a valid line item array.
    #[error("invalid cart payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encode a cart as a cookie-safe string.
///
/// Serialization of a cart cannot fail: every field is a plain value with
/// an infallible JSON representation, so a serializer error here would be
/// a bug in the data model.
#[must_use]
pub fn encode(cart: &Cart) -> String {
    let json = serde_json::to_string(cart).unwrap_or_else(|_| "[]".to_string());
    urlencoding::encode(&json).into_owned()
}

/// Decode a cookie value into a cart.
///
/// Absent, empty, and whitespace-only input all yield an empty cart.
///
/// # Errors
///
/// Returns [`CodecError`] when the value is present but is not a valid
/// percent-encoded JSON array of line items.
pub fn decode(raw: Option<&str>) -> Result<Cart, CodecError> {
    let Some(raw) = raw else {
        return Ok(Cart::new());
    };
    if raw.trim().is_empty() {
        return Ok(Cart::new());
    }

    let json = urlencoding::decode(raw)?;
    let items: Vec<LineItem> = serde_json::from_str(&json)?;
    // Collecting re-establishes id uniqueness even for a hand-crafted
    // cookie that carries duplicate entries.
    Ok(items.into_iter().collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::{ItemId, LineItem};

    fn sample_cart() -> Cart {
        vec![
            LineItem {
                id: ItemId::new(1),
                quantity: 2,
                title: "Enamel mug".to_string(),
                sell_point: Some("Holds coffee".to_string()),
                price: Decimal::new(1250, 2),
                image: Some("mug.jpg".to_string()),
            },
            LineItem {
                id: ItemId::new(7),
                quantity: 1,
                title: "Widget".to_string(),
                sell_point: None,
                price: Decimal::new(999, 2),
                image: None,
            },
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_round_trip() {
        let cart = sample_cart();
        let encoded = encode(&cart);
        let decoded = decode(Some(&encoded)).unwrap();
        assert_eq!(decoded, cart);
    }

    #[test]
    fn test_round_trip_empty_cart() {
        let cart = Cart::new();
        let decoded = decode(Some(&encode(&cart))).unwrap();
        assert_eq!(decoded, cart);
    }

    #[test]
    fn test_encoded_value_is_cookie_safe() {
        let encoded = encode(&sample_cart());
        // No characters a cookie value cannot carry.
        assert!(
            !encoded
                .chars()
                .any(|c| matches!(c, '"' | ',' | ';' | '\\' | ' '))
        );
    }

    #[test]
    fn test_decode_absent_is_empty() {
        assert_eq!(decode(None).unwrap(), Cart::new());
    }

    #[test]
    fn test_decode_blank_is_empty() {
        assert_eq!(decode(Some("")).unwrap(), Cart::new());
        assert_eq!(decode(Some("   ")).unwrap(), Cart::new());
        assert_eq!(decode(Some("\t\n")).unwrap(), Cart::new());
    }

    #[test]
    fn test_decode_malformed_json_is_error() {
        let err = decode(Some("not-json")).unwrap_err();
        assert!(matches!(err, CodecError::Json(_)));
    }

    #[test]
    fn test_decode_wrong_shape_is_error() {
        // Valid JSON, wrong structure.
        let encoded = urlencoding::encode(r#"{"id":1}"#).into_owned();
        let err = decode(Some(&encoded)).unwrap_err();
        assert!(matches!(err, CodecError::Json(_)));
    }

    #[test]
    fn test_decode_merges_duplicate_ids() {
        // A hand-crafted payload with the same id twice collapses into a
        // single entry with the quantities merged.
        let json = r#"[
            {"id":1,"quantity":2,"title":"Widget","price":"9.99"},
            {"id":1,"quantity":3,"title":"Widget","price":"9.99"}
        ]"#;
        let encoded = urlencoding::encode(json).into_owned();
        let cart = decode(Some(&encoded)).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(ItemId::new(1)).unwrap().quantity, 5);
    }

    #[test]
    fn test_decode_tolerates_omitted_optional_fields() {
        let json = r#"[{"id":3,"quantity":1,"title":"Bare","price":"4.00"}]"#;
        let encoded = urlencoding::encode(json).into_owned();
        let cart = decode(Some(&encoded)).unwrap();
        assert_eq!(cart.len(), 1);
        assert!(cart.get(ItemId::new(3)).unwrap().image.is_none());
    }
}
