//! # Cart Client
//!
//! Provides a high‑level API for interacting with the `Cart` actor.
use crate::cart_actor::{CartAction, CartError};
use crate::model::{Cart, CartItem, UserId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast::<CartError>() {
            Ok(err) => err,
            Err(other) => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl CartClient {
    /// Appends `item` to the user's cart, creating the cart if needed.
    ///
    /// Returns the updated cart.
    #[instrument(skip(self))]
    pub async fn add_to_cart(&self, user_id: UserId, item: CartItem) -> Result<Cart, CartError> {
        debug!("Sending request");
        self.inner
            .perform_action(user_id, CartAction::AddItem(item))
            .await
            .map_err(Self::map_error)
    }

    /// The user's cart, or an empty one. Never creates a cart.
    #[instrument(skip(self))]
    pub async fn view_cart(&self, user_id: UserId) -> Result<Cart, CartError> {
        let cart = self.get(user_id.clone()).await?;
        Ok(cart.unwrap_or_else(|| Cart::empty(user_id)))
    }
}
