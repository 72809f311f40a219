//! Domain-specific error types and error handling.

mod relay_error;

pub use relay_error::RelayError;

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Store unavailable: {message}")]
    Unavailable { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to relay-specific errors
    #[error(transparent)]
    Relay(#[from] RelayError),
}

pub type DomainResult<T> = Result<T, DomainError>;
