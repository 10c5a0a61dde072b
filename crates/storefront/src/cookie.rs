//! Cart cookie plumbing.
//!
//! The cookie *is* the cart's datastore: every request materializes the
//! cart from the `Cookie` header and every mutation writes the whole cart
//! back through `Set-Cookie`. Nothing is kept between requests.
//!
//! A present-but-malformed cookie value is treated as corruption and reset
//! to an empty cart (with a warning) rather than failing the request; a
//! shopper with a mangled cookie should get a fresh cart, not an error
//! page. The strict alternative lives in `cartwheel_core::codec`, which
//! surfaces the parse error to this layer.

use axum::http::{HeaderMap, header};
use cookie::{Cookie, SameSite, time::Duration};
use tracing::warn;

use cartwheel_core::{Cart, codec};

use crate::config::StorefrontConfig;

/// Extract the raw cart cookie value from request headers.
#[must_use]
pub fn cart_cookie_value(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(std::result::Result::ok)
        .find(|cookie| cookie.name() == cookie_name)
        .map(|cookie| cookie.value().to_string())
}

/// Materialize the cart for this request.
///
/// Absent or blank cookies yield an empty cart. Malformed content is
/// logged and reset to an empty cart.
#[must_use]
pub fn load_cart(headers: &HeaderMap, config: &StorefrontConfig) -> Cart {
    let raw = cart_cookie_value(headers, &config.cart.cookie_name);
    match codec::decode(raw.as_deref()) {
        Ok(cart) => cart,
        Err(e) => {
            warn!(error = %e, "Malformed cart cookie, resetting to empty cart");
            Cart::new()
        }
    }
}

/// Build the `Set-Cookie` header value persisting the cart.
///
/// HttpOnly and SameSite=Lax always; Secure when the storefront is served
/// over HTTPS. Max-Age comes from configuration - once it lapses the
/// client discards the cookie and the next request starts from an empty
/// cart.
#[must_use]
pub fn set_cart_cookie(cart: &Cart, config: &StorefrontConfig) -> String {
    let cookie = Cookie::build((config.cart.cookie_name.clone(), codec::encode(cart)))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.is_secure())
        .path("/")
        .max_age(Duration::seconds(config.cart.ttl_seconds))
        .build();

    cookie.to_string()
}
