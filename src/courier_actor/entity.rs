//! [`ActorEntity`] implementation for [`Courier`].

use super::actions::CourierAction;
use super::error::CourierError;
use crate::model::{Courier, CourierCreate, CourierId};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Courier {
    type Id = CourierId;
    type Create = CourierCreate;
    type Action = CourierAction;
    type ActionResult = Courier;
    type Context = ();
    type Error = CourierError;

    fn assign_id(_seq: u32, params: &CourierCreate) -> CourierId {
        CourierId(params.id)
    }

    fn from_create_params(id: CourierId, params: CourierCreate) -> Result<Self, CourierError> {
        if id == CourierId::UNASSIGNED {
            return Err(CourierError::ValidationError(
                "courier id 0 is reserved".to_string(),
            ));
        }
        Ok(Courier::new(id, params.name, params.phone))
    }

    fn accepts(&self, action: &CourierAction) -> bool {
        match action {
            CourierAction::Allocate => self.is_available,
            CourierAction::CompleteDelivery => !self.is_available,
        }
    }

    async fn handle_action(
        &mut self,
        action: CourierAction,
        _ctx: &Self::Context,
    ) -> Result<Courier, CourierError> {
        match action {
            CourierAction::Allocate => {
                if !self.is_available {
                    return Err(CourierError::AlreadyAllocated(self.id));
                }
                self.is_available = false;
            }
            CourierAction::CompleteDelivery => {
                if self.is_available {
                    return Err(CourierError::NotAllocated(self.id));
                }
                self.is_available = true;
            }
        }
        Ok(self.clone())
    }
}
