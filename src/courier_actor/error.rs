//! Error types for the Courier actor.

use crate::error::{Classify, ErrorKind};
use crate::model::CourierId;
use thiserror::Error;

/// Errors that can occur during courier operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CourierError {
    /// No courier has this id.
    #[error("Courier not found: {0}")]
    CourierNotFound(CourierId),

    /// The courier is already out on a delivery.
    #[error("Courier {0} is already allocated")]
    AlreadyAllocated(CourierId),

    /// The courier is not out on a delivery.
    #[error("Courier {0} is not allocated")]
    NotAllocated(CourierId),

    /// A courier with this id is already in the pool.
    #[error("Courier already exists: {0}")]
    DuplicateCourier(String),

    /// The registration payload is unusable.
    #[error("Invalid courier: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CourierError {
    fn from(msg: String) -> Self {
        CourierError::ActorCommunicationError(msg)
    }
}

impl Classify for CourierError {
    fn kind(&self) -> ErrorKind {
        match self {
            CourierError::CourierNotFound(_) => ErrorKind::NotFound,
            CourierError::AlreadyAllocated(_)
            | CourierError::NotAllocated(_)
            | CourierError::DuplicateCourier(_) => ErrorKind::Conflict,
            CourierError::ValidationError(_) => ErrorKind::Validation,
            CourierError::ActorCommunicationError(_) => ErrorKind::Unavailable,
        }
    }
}
