//! # Cart Actor
//!
//! One cart per user, accumulating line items and a running total.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Cart`]
//! - [`error`] - [`CartError`] type for type-safe error handling
//! - [`actions`] - [`CartAction`] for appending items
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use food_order::cart_actor;
//! use food_order::model::CartItem;
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = cart_actor::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     // Reading does not create a cart
//!     assert!(client.view_cart("u1".into()).await?.is_empty());
//!
//!     let cart = client
//!         .add_to_cart("u1".into(), CartItem::new("pizza", 2, Decimal::new(1099, 2)))
//!         .await?;
//!     assert_eq!(cart.total(), Decimal::new(2198, 2));
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CartClient;
use crate::model::Cart;
use actor_framework::ResourceActor;

/// Creates a new Cart actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Cart>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, CartClient::new(generic_client))
}
