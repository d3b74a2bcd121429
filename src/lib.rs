//! # Food Order
//!
//! An in-memory food-ordering core built on resource actors: restaurant menus,
//! per-user carts, a courier pool, and an order ledger that binds a courier to
//! each order.
//!
//! ## Architecture Notes
//!
//! ### 1. One actor per resource
//! Every shared resource is owned by a single [`ResourceActor`](actor_framework::ResourceActor)
//! task. Requests are processed one at a time, so a cart append, a courier
//! scan-then-mark, or a ledger append with its id counter is a critical section
//! without any lock.
//!
//! ### 2. Type-Safe Error Handling
//! Each actor defines its own error type (`CatalogError`, `CartError`, `CourierError`,
//! `OrderError`). Entity errors cross the framework boxed and are recovered by type in
//! the clients. The `#[from]` attribute converts dependency errors inside the Order actor.
//! [`error::ErrorKind`] groups them into broad classes.
//!
//! ### 3. Async Context Injection
//! The Order actor receives the Catalog and Courier clients when its loop starts, and
//! uses them in its `on_create` hook to resolve the restaurant and allocate a courier.
//!
//! ### 4. Observability
//! `tracing` everywhere, with structured fields. See [`lifecycle::tracing`].
//!
//! ## Module Tour
//!
//! - [`model`] - data types: [`Restaurant`](model::Restaurant), [`Cart`](model::Cart),
//!   [`Courier`](model::Courier), [`Order`](model::Order)
//! - [`catalog_actor`], [`cart_actor`], [`courier_actor`], [`order_actor`] - the
//!   `ActorEntity` implementations, actions and errors
//! - [`clients`] - typed clients wrapping `ResourceClient`
//! - [`lifecycle`] - configuration, seeding, startup and shutdown
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! FOOD_ORDER_SEED=seed.json cargo run
//! ```

pub mod cart_actor;
pub mod catalog_actor;
pub mod clients;
pub mod courier_actor;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
