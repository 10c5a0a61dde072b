//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::DynCatalog;
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the injected catalog capability. There is no
/// database handle anywhere: the cart cookie is the only datastore.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: DynCatalog,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `catalog` - Item lookup capability (HTTP client in production,
    ///   a fixture in tests)
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: DynCatalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, catalog }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the item catalog.
    #[must_use]
    pub fn catalog(&self) -> &DynCatalog {
        &self.inner.catalog
    }
}
