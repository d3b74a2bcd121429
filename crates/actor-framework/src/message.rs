//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// Every resource speaks the same small vocabulary; resource-specific behaviour
/// goes through `Action` with the entity's own [`ActorEntity::Action`] enum.
///
/// - **Create**: Uses [`ActorEntity::Create`] to initialize a new resource.
/// - **Get**: Fetches the current state of one resource by ID.
/// - **List**: Snapshot of every resource, ascending by ID.
/// - **Action**: Executes a custom action against one resource.
/// - **ActionAny**: Executes a custom action against the first resource (ascending by ID)
///   that [accepts](ActorEntity::accepts) it. Replies `None` when nothing is eligible.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    ActionAny {
        action: T::Action,
        respond_to: Response<Option<(T::Id, T::ActionResult)>>,
    },
}
