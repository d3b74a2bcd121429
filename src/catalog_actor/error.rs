//! Error types for the Catalog actor.

use crate::error::{Classify, ErrorKind};
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// No restaurant has this name.
    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(String),

    /// The restaurant has no dish with this name.
    #[error("Dish '{dish}' not found at {restaurant}")]
    DishNotFound { restaurant: String, dish: String },

    /// No dish in the catalog has this category.
    #[error("No dishes of category {0}")]
    CategoryNotFound(String),

    /// A restaurant with this name is already registered.
    #[error("Restaurant already exists: {0}")]
    DuplicateRestaurant(String),

    /// The registration payload is unusable.
    #[error("Invalid restaurant: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::ActorCommunicationError(msg)
    }
}

impl Classify for CatalogError {
    fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::RestaurantNotFound(_)
            | CatalogError::DishNotFound { .. }
            | CatalogError::CategoryNotFound(_) => ErrorKind::NotFound,
            CatalogError::DuplicateRestaurant(_) => ErrorKind::Conflict,
            CatalogError::ValidationError(_) => ErrorKind::Validation,
            CatalogError::ActorCommunicationError(_) => ErrorKind::Unavailable,
        }
    }
}
