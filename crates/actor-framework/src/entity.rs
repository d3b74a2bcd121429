//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a resource (restaurant, cart, courier,
//! order, ...) implements to be owned by a generic [`ResourceActor`](crate::ResourceActor).
//! It names the key, the create payload, the custom actions and the error type, and
//! provides the hooks the actor calls while processing its mailbox.
//!
//! # Keys
//! Some resources are keyed by something the caller already knows (a restaurant's
//! name, a user id), others by a number the actor hands out (order numbers).
//! [`ActorEntity::assign_id`] covers both: it receives the actor's sequence number
//! and the create payload and returns the key. The sequence number only advances
//! when a create succeeds, so numbered keys have no gaps.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`] - async validation or side effects before insertion
//! - [`ActorEntity::lazy_default`] - entities that exist implicitly
//! - [`ActorEntity::accepts`] - eligibility for "first match" actions
//!
//! The defaults do nothing, exist nowhere and accept everything, respectively.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g., calling other actors).
/// It also defines a `Context` type, which is injected into every hook. This allows "Late Binding"
/// of dependencies (passing clients to `run()` instead of `new()`).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique key for this entity.
    ///
    /// `Ord` gives the store a stable iteration order, which `List` and
    /// `ActionAny` rely on.
    type Id: Ord + Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `Allocate`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per message: a client deals with a
    /// single `CartError` and matches on its variants.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Derive the key of a new entity.
    ///
    /// `seq` is the actor's creation counter (starting at 1). It is consumed only
    /// if the create succeeds.
    fn assign_id(seq: u32, params: &Self::Create) -> Self::Id;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    /// An error here discards the entity; nothing is inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// The entity an `Action` should start from when `id` is not in the store.
    ///
    /// Returning `Some` makes entities implicit: the action runs against the
    /// default and the result is stored only if the action succeeds. `Get` never
    /// consults this hook.
    fn lazy_default(_id: &Self::Id) -> Option<Self> {
        None
    }

    /// Whether this entity is eligible for `action` when it is sent without an id.
    fn accepts(&self, _action: &Self::Action) -> bool {
        true
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
