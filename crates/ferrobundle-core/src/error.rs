use thiserror::Error;

use crate::http_client::HttpError;

/// Validation errors for configuration and region inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("base url cannot be empty")]
    EmptyBaseUrl,
    #[error("base url must start with http:// or https://: '{value}'")]
    UnsupportedScheme { value: String },
    #[error("timeout_ms must be greater than zero")]
    ZeroTimeout,
    #[error("region id cannot be empty")]
    EmptyRegionId,
}

/// Failure of a single bundle fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] HttpError),

    #[error("invalid bundle payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Bundle not found")]
    NotFound,
}

impl FetchError {
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Errors raised while resolving or writing a display region.
#[derive(Debug, Error)]
pub enum RegionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no element with id '{id}' in {path}")]
    ElementNotFound { id: String, path: String },

    #[error("element with id '{id}' in {path} has no matching closing tag")]
    UnterminatedElement { id: String, path: String },

    #[error("region io error: {0}")]
    Io(#[from] std::io::Error),
}
