//! # Actor Framework
//!
//! Building blocks for type-safe, concurrent resource actors on Tokio. Each resource
//! type gets one actor task that owns every entity of that type; callers talk to it
//! through a cloneable client over a bounded channel.
//!
//! ## Why one actor per resource?
//!
//! - Isolated state: no shared memory, no locks
//! - Message-passing concurrency
//! - Sequential processing within each actor eliminates races such as two callers
//!   claiming the same entity, or two creates drawing the same sequence number
//!
//! When resources must coordinate (an order that needs a courier), the coordinating
//! actor calls the other actor's client from a hook, instead of sharing state.
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your business logic and domain models
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and concurrency
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ## Operations
//!
//! | Request | Meaning |
//! |---------|---------|
//! | `Create` | Build, validate (`on_create`) and store a new entity |
//! | `Get` | Clone of one entity, if present |
//! | `List` | Clones of all entities, ascending by id |
//! | `Action` | Resource-specific mutation of one entity (or of its lazy default) |
//! | `ActionAny` | Resource-specific mutation of the first eligible entity |
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via the `run()` method, not at construction
//! time. An actor whose entity declares `type Context = (ResourceClient<A>, ResourceClient<B>)`
//! is started with `actor.run((a_client, b_client))`, and every hook receives that tuple.
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockClient`, a `ResourceClient<T>` backed by scripted
//! responses, for testing client logic or an actor whose dependencies are mocked.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
