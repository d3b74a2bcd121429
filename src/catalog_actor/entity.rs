//! [`ActorEntity`] implementation for [`Restaurant`].
//!
//! Restaurants are keyed by name, so registering the same name twice is
//! rejected by the actor as a conflict.

use super::actions::CatalogAction;
use super::error::CatalogError;
use crate::model::{Restaurant, RestaurantCreate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Restaurant {
    type Id = String;
    type Create = RestaurantCreate;
    type Action = CatalogAction;
    type ActionResult = Restaurant;
    type Context = ();
    type Error = CatalogError;

    fn assign_id(_seq: u32, params: &RestaurantCreate) -> String {
        params.name.clone()
    }

    fn from_create_params(name: String, params: RestaurantCreate) -> Result<Self, CatalogError> {
        if name.trim().is_empty() {
            return Err(CatalogError::ValidationError(
                "restaurant name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            name,
            is_closed: params.is_closed,
            address: params.address,
            menu: params.menu,
        })
    }

    /// # Actions
    /// - `ToggleFavorite`: flips the matching slot, `DishNotFound` if none matches
    async fn handle_action(
        &mut self,
        action: CatalogAction,
        _ctx: &Self::Context,
    ) -> Result<Restaurant, CatalogError> {
        match action {
            CatalogAction::ToggleFavorite(dish) => {
                let Some(slot) = self.menu.slot_mut(&dish) else {
                    return Err(CatalogError::DishNotFound {
                        restaurant: self.name.clone(),
                        dish,
                    });
                };
                slot.is_favorite = !slot.is_favorite;
                Ok(self.clone())
            }
        }
    }
}
