//! [`ActorEntity`] implementation for [`Cart`].
//!
//! Carts are implicit: [`lazy_default`](ActorEntity::lazy_default) gives every
//! user an empty cart that the actor stores the first time an item is added.

use super::actions::CartAction;
use super::error::CartError;
use crate::model::{Cart, UserId};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Cart {
    type Id = UserId;
    type Create = UserId;
    type Action = CartAction;
    type ActionResult = Cart;
    type Context = ();
    type Error = CartError;

    fn assign_id(_seq: u32, user_id: &UserId) -> UserId {
        user_id.clone()
    }

    fn from_create_params(user_id: UserId, _params: UserId) -> Result<Self, CartError> {
        Ok(Cart::empty(user_id))
    }

    fn lazy_default(user_id: &UserId) -> Option<Self> {
        Some(Cart::empty(user_id.clone()))
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        _ctx: &Self::Context,
    ) -> Result<Cart, CartError> {
        match action {
            CartAction::AddItem(item) => {
                item.validate().map_err(CartError::InvalidItem)?;
                self.add_item(item).map_err(CartError::InvalidItem)?;
                Ok(self.clone())
            }
        }
    }
}
