//! # Catalog Actor
//!
//! Owns the restaurant directory: each [`Restaurant`] with its three-slot menu,
//! keyed by name.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Restaurant`]
//! - [`error`] - [`CatalogError`] type for type-safe error handling
//! - [`actions`] - [`CatalogAction`] for the favourite toggle
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use food_order::catalog_actor;
//! use food_order::model::{Address, FoodCategory, Menu, MenuSlot, RestaurantCreate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = catalog_actor::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     client
//!         .register(RestaurantCreate {
//!             name: "abc".to_string(),
//!             is_closed: false,
//!             address: Address { street: "street1".into(), city: "city1".into() },
//!             menu: Menu {
//!                 breakfast: MenuSlot::new("apple", FoodCategory::Veg, false),
//!                 lunch: MenuSlot::new("burger", FoodCategory::NonVeg, true),
//!                 dinner: MenuSlot::new("pizza", FoodCategory::Veg, true),
//!                 deliver_from: 1000,
//!                 deliver_till: 1600,
//!             },
//!         })
//!         .await?;
//!
//!     let abc = client.toggle_favorite("abc", "apple").await?;
//!     assert!(abc.menu.breakfast.is_favorite);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CatalogClient;
use crate::model::Restaurant;
use actor_framework::ResourceActor;

/// Creates a new Catalog actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Restaurant>, CatalogClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, CatalogClient::new(generic_client))
}
