//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns the entities of
//! one resource type. It is the "Server" side of the Actor Model: messages are
//! processed one at a time, so each request is a critical section over the store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// **Concurrency Model**:
/// Each actor processes its own messages *sequentially* in a loop, so the `store`
/// needs no `Mutex`. A scan-then-mark (`ActionAny`) or a create that consults
/// other actors in `on_create` cannot interleave with another request to the
/// same actor.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Ticket { id: u32, claimed: bool }
/// #[derive(Debug)] struct TicketCreate;
/// #[derive(Debug)] enum TicketAction { Claim }
/// #[derive(Debug, thiserror::Error)] #[error("ticket error")] struct TicketError;
///
/// #[async_trait]
/// impl ActorEntity for Ticket {
///     type Id = u32;
///     type Create = TicketCreate;
///     type Action = TicketAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = TicketError;
///
///     fn assign_id(seq: u32, _: &TicketCreate) -> u32 { seq }
///     fn from_create_params(id: u32, _: TicketCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, claimed: false })
///     }
///     fn accepts(&self, _: &TicketAction) -> bool { !self.claimed }
///     async fn handle_action(&mut self, _: TicketAction, _: &()) -> Result<(), Self::Error> {
///         self.claimed = true;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Ticket>::new(10);
///     tokio::spawn(actor.run(()));
///
///     client.create(TicketCreate).await.unwrap();
///     let claimed = client.perform_action_any(TicketAction::Claim).await.unwrap();
///     assert_eq!(claimed.map(|(id, _)| id), Some(1));
///     assert!(client.perform_action_any(TicketAction::Claim).await.unwrap().is_none());
/// }
/// ```
///
/// # Implementation Details
///
/// * **Create**: derives the key with [`ActorEntity::assign_id`], rejects a key that is
///   already stored, builds the entity, runs `on_create`, inserts, and only then
///   advances the sequence counter.
/// * **Get**: clone of the stored entity, or `None`. Never materialises a lazy default.
/// * **List**: clones of every entity, ascending by key.
/// * **Action**: runs `handle_action` on the stored entity, or on
///   [`ActorEntity::lazy_default`] (stored only if the action succeeds).
/// * **ActionAny**: runs `handle_action` on the first entity, ascending by key,
///   that [accepts](ActorEntity::accepts) the action.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_seq: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. If the channel is full,
    /// calls to the client wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_seq: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies (like other clients) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // "Courier" rather than "food_order::model::courier::Courier"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::assign_id(self.next_seq, &params);

                    if self.store.contains_key(&id) {
                        warn!(entity_type, %id, "Already exists");
                        let _ = respond_to.send(Err(FrameworkError::Conflict(id.to_string())));
                        continue;
                    }

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, %id, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            self.next_seq += 1;
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else if let Some(mut fresh) = T::lazy_default(&id) {
                        match fresh.handle_action(action, &context).await {
                            Ok(result) => {
                                self.store.insert(id.clone(), fresh);
                                info!(entity_type, %id, size = self.store.len(), "Action ok on new entity");
                                let _ = respond_to.send(Ok(result));
                            }
                            Err(e) => {
                                warn!(entity_type, %id, error = %e, "Action failed, entity not kept");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            }
                        }
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::ActionAny { action, respond_to } => {
                    debug!(entity_type, ?action, "ActionAny");
                    let size = self.store.len();
                    let target = self
                        .store
                        .iter_mut()
                        .find(|(_, item)| item.accepts(&action));

                    match target {
                        Some((id, item)) => {
                            let id = id.clone();
                            let result = item
                                .handle_action(action, &context)
                                .await
                                .map(|result| Some((id.clone(), result)))
                                .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                            match &result {
                                Ok(_) => info!(entity_type, %id, "Action ok"),
                                Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                            }
                            let _ = respond_to.send(result);
                        }
                        None => {
                            info!(entity_type, size, "No eligible entity");
                            let _ = respond_to.send(Ok(None));
                        }
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
