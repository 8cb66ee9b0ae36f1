//! Store error types.

use portal_models::TransitionError;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while talking to the store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid record id: {0}")]
    InvalidId(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    IllegalTransition(#[from] TransitionError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("unexpected driver response: {0}")]
    Unexpected(String),

    #[error("database error: {0}")]
    Driver(#[from] mongodb::error::Error),
}

impl StoreError {
    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidId(id.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}
