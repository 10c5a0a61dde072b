//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CATALOG_BASE_URL` - Base URL of the item catalog service
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL (default: `http://localhost:3000`;
//!   an https URL marks the cart cookie `Secure`)
//! - `CART_COOKIE_NAME` - Name of the cart cookie (default: cart)
//! - `CART_TTL_SECONDS` - Cart cookie time-to-live (default: 604800 = 7 days)
//!
//! The cookie name and TTL are deliberately configuration, not constants:
//! the cart has no server-side store, so these two values fully describe
//! its persistence.

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Base URL of the item catalog service
    pub catalog_base_url: String,
    /// Cart cookie settings
    pub cart: CartCookieConfig,
}

/// Cart cookie settings.
#[derive(Debug, Clone)]
pub struct CartCookieConfig {
    /// Cookie name the cart state is stored under
    pub cookie_name: String,
    /// Cookie time-to-live in seconds; after expiry the client discards
    /// the cookie and the next request starts from an empty cart
    pub ttl_seconds: i64,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;
        let base_url = get_env_or_default("STOREFRONT_BASE_URL", "http://localhost:3000");
        let catalog_base_url = get_required_env("CATALOG_BASE_URL")?;
        let cart = CartCookieConfig::from_env()?;

        Ok(Self {
            host,
            port,
            base_url,
            catalog_base_url,
            cart,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the storefront is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl CartCookieConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let cookie_name = get_env_or_default("CART_COOKIE_NAME", "cart");
        let ttl_seconds = get_env_or_default("CART_TTL_SECONDS", "604800")
            .parse::<i64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CART_TTL_SECONDS".to_string(), e.to_string())
            })?;
        if ttl_seconds <= 0 {
            return Err(ConfigError::InvalidEnvVar(
                "CART_TTL_SECONDS".to_string(),
                format!("must be positive (got {ttl_seconds})"),
            ));
        }

        Ok(Self {
            cookie_name,
            ttl_seconds,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config(base_url: &str) -> StorefrontConfig {
        StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: base_url.to_string(),
            catalog_base_url: "http://localhost:8080".to_string(),
            cart: CartCookieConfig {
                cookie_name: "cart".to_string(),
                ttl_seconds: 604_800,
            },
        }
    }

    #[test]
    fn test_socket_addr() {
        let config = test_config("http://localhost:3000");
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_is_secure() {
        assert!(!test_config("http://localhost:3000").is_secure());
        assert!(test_config("https://shop.example.com").is_secure());
    }
}
