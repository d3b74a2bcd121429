//! Error types for the Cart actor.

use crate::error::{Classify, ErrorKind};
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The item has a zero quantity, a negative price, or an out-of-range total.
    #[error("Invalid cart item: {0}")]
    InvalidItem(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CartError {
    fn from(msg: String) -> Self {
        CartError::ActorCommunicationError(msg)
    }
}

impl Classify for CartError {
    fn kind(&self) -> ErrorKind {
        match self {
            CartError::InvalidItem(_) => ErrorKind::Validation,
            CartError::ActorCommunicationError(_) => ErrorKind::Unavailable,
        }
    }
}
