//! # System Lifecycle & Orchestration
//!
//! Starting, wiring, seeding and shutting down the four actors.
//!
//! - [`Config`] - settings read from the environment
//! - [`Seed`] - the initial catalog and courier pool (built-in or JSON file)
//! - [`OrderSystem`] - spawns the actors and hands out their clients
//! - [`setup_tracing`] - the `tracing` subscriber for the binary
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them when their loop
//! starts (`run(context)`). Only the Order actor has any:
//!
//! ```rust,ignore
//! impl ActorEntity for Order {
//!     type Context = (CatalogClient, CourierClient);
//! }
//! ```
//!
//! The dependency graph is acyclic, so closing channels is enough to shut down:
//!
//! 1. **Drop all clients** - closes the sender side of channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Order actor exits** - dropping its Catalog and Courier clients
//! 4. **Await completion** - wait for all actor tasks to finish

pub mod config;
pub mod order_system;
pub mod seed;
pub mod tracing;

pub use self::config::*;
pub use self::order_system::*;
pub use self::seed::*;
pub use self::tracing::*;
