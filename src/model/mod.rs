//! Pure data structures (DTOs) implementing the [`ActorEntity`](actor_framework::ActorEntity) trait.

pub mod cart;
pub mod courier;
pub mod order;
pub mod restaurant;

pub use cart::*;
pub use courier::*;
pub use order::*;
pub use restaurant::*;
