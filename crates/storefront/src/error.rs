//! Unified error handling.
//!
//! Provides a unified `AppError` type for route handlers. All route
//! handlers should return `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use cartwheel_core::{CodecError, ItemId};

use crate::catalog::CatalogError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// The catalog has no item with the requested id. Raised when adding
    /// a brand-new item; the cart cookie is not written in this case.
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// Catalog lookup failed for transport reasons.
    #[error("Catalog error: {0}")]
    Catalog(CatalogError),

    /// Cart cookie content could not be encoded or decoded.
    #[error("Cart codec error: {0}")]
    Codec(#[from] CodecError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => Self::ItemNotFound(id),
            other => Self::Catalog(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Catalog(_) | Self::Internal(_)) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::ItemNotFound(_) => StatusCode::NOT_FOUND,
            Self::Catalog(_) => StatusCode::BAD_GATEWAY,
            Self::Codec(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::ItemNotFound(id) => format!("Item not found: {id}"),
            Self::Catalog(_) => "Catalog service error".to_string(),
            Self::Codec(_) => "Invalid cart state".to_string(),
            Self::BadRequest(msg) => format!("Bad request: {msg}"),
            Self::Internal(_) => "Internal server error".to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
