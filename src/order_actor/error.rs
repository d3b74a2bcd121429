//! Error types for the Order actor.

use crate::catalog_actor::CatalogError;
use crate::courier_actor::CourierError;
use crate::error::{Classify, ErrorKind};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// No order has this id.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// The order names a restaurant that is not in the catalog.
    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(String),

    /// Every courier is out on a delivery.
    #[error("No courier available")]
    NoCourierAvailable,

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// The catalog failed while resolving the restaurant.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The courier pool failed while allocating.
    #[error(transparent)]
    Courier(#[from] CourierError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}

impl Classify for OrderError {
    fn kind(&self) -> ErrorKind {
        match self {
            OrderError::OrderNotFound(_) | OrderError::RestaurantNotFound(_) => {
                ErrorKind::NotFound
            }
            OrderError::NoCourierAvailable => ErrorKind::ResourceExhausted,
            OrderError::ValidationError(_) => ErrorKind::Validation,
            OrderError::Catalog(e) => e.kind(),
            OrderError::Courier(e) => e.kind(),
            OrderError::ActorCommunicationError(_) => ErrorKind::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dependency_errors_keep_their_kind() {
        assert_eq!(OrderError::NoCourierAvailable.kind(), ErrorKind::ResourceExhausted);
        assert_eq!(
            OrderError::from(CatalogError::ActorCommunicationError("closed".into())).kind(),
            ErrorKind::Unavailable
        );
        assert_eq!(
            OrderError::ValidationError("empty".into()).kind(),
            ErrorKind::Validation
        );
    }
}
