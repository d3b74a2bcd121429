//! # Courier Actor
//!
//! The courier pool. Each [`Courier`] has one mutable field, `is_available`.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Courier`]
//! - [`error`] - [`CourierError`] type for type-safe error handling
//! - [`actions`] - [`CourierAction`] for allocation and delivery completion
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Exclusive allocation
//!
//! [`CourierClient::allocate_any`](crate::clients::CourierClient::allocate_any) sends a
//! single `ActionAny` request. The actor scans couriers in ascending id order and
//! marks the first available one busy before it reads its next message, so two
//! concurrent allocations can never return the same courier. When every courier
//! is busy the answer is `None` and nothing changes.
//!
//! ```rust
//! use food_order::courier_actor;
//! use food_order::model::CourierCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = courier_actor::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     client
//!         .register(CourierCreate { id: 1, name: "John Doe".into(), phone: "123-456-7890".into() })
//!         .await?;
//!
//!     let courier = client.allocate_any().await?.expect("one courier is free");
//!     assert!(client.allocate_any().await?.is_none());
//!
//!     client.complete_delivery(courier.id).await?;
//!     assert!(client.allocate_any().await?.is_some());
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CourierClient;
use crate::model::Courier;
use actor_framework::ResourceActor;

/// Creates a new Courier actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Courier>, CourierClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, CourierClient::new(generic_client))
}
