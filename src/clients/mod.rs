//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).

pub mod cart_client;
pub mod catalog_client;
pub mod courier_client;
pub mod order_client;

pub use cart_client::*;
pub use catalog_client::*;
pub use courier_client::*;
pub use order_client::*;
