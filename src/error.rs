// ============================================================================
// ERRORS - Order service, modal and storage failures
// ============================================================================

use thiserror::Error;

use crate::models::order::{OrderField, OrderId};

/// Failures of the four order service operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// A required field is empty or malformed
    #[error("Validation error: {0}")]
    Validation(String),

    /// The service does not know this order
    #[error("Order {0} not found")]
    NotFound(OrderId),

    /// Network or service failure
    #[error("Transport error: {0}")]
    Transport(String),
}

impl From<gloo_net::Error> for OrderError {
    fn from(err: gloo_net::Error) -> Self {
        OrderError::Transport(err.to_string())
    }
}

pub type OrderResult<T> = Result<T, OrderError>;

/// Rejected modal transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModalError {
    #[error("No order is open for editing")]
    NotOpen,

    #[error("A request is already in progress")]
    Busy,

    #[error("Field {0} is read-only")]
    ReadOnlyField(OrderField),

    #[error("{0}")]
    Validation(String),

    #[error("Only existing orders can be deleted")]
    NotDeletable,
}

/// Sign-in failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Sign-in failed: {0}")]
    Transport(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<gloo_net::Error> for AuthError {
    fn from(err: gloo_net::Error) -> Self {
        AuthError::Transport(err.to_string())
    }
}

/// Browser storage failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}
