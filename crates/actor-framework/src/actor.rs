//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the server half of the framework. It owns the
//! keyed entity store and processes requests one at a time, so an entity never sees two
//! actions concurrently.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of keyed entities.
///
/// **Concurrency Model**:
/// Each `ResourceActor` runs in its own Tokio task and drains its mailbox sequentially.
/// Requests for the same key are therefore applied strictly in the order they were
/// enqueued, without any `Mutex` around the store. Several actors of the same entity type
/// can run side by side (see sharding in the client crates) to process different keys in
/// parallel.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the `actor` (server) and `client`.
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Counter { id: u32, hits: u32 }
/// #[derive(Debug)] enum CounterAction { Hit, Reset }
/// #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
///
/// #[async_trait]
/// impl ActorEntity for Counter {
///     type Id = u32;
///     type Action = CounterAction;
///     type ActionResult = u32;
///     type Context = ();
///     type Error = CounterError;
///
///     fn spawn(id: u32) -> Self { Self { id, hits: 0 } }
///     async fn handle_action(&mut self, action: CounterAction, _: &()) -> Result<u32, CounterError> {
///         match action {
///             CounterAction::Hit => self.hits += 1,
///             CounterAction::Reset => self.hits = 0,
///         }
///         Ok(self.hits)
///     }
///     fn is_dormant(&self) -> bool { self.hits == 0 }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Counter>::new(10);
///     tokio::spawn(actor.run(()));
///
///     assert_eq!(client.perform_action(7, CounterAction::Hit).await.unwrap(), 1);
///     assert_eq!(client.perform_action(7, CounterAction::Reset).await.unwrap(), 0);
///     // A reset counter is dormant and has been evicted.
///     assert!(client.get(7).await.unwrap().is_none());
/// }
/// ```
///
/// ## Operations
///
/// * **Get**: clone of the live entity, or `None`.
/// * **Action**:
///     1. Looks up the entity, calling `T::spawn` when the key is unknown.
///     2. Calls `handle_action` with the injected context.
///     3. Evicts the entity (after `on_evict`) if it is now dormant.
///     4. Returns the action result.
/// * **Count**: number of live entities.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the mailbox capacity. When it is full, senders wait for space,
    /// which applies backpressure to whoever feeds the actor.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// The `context` argument is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Short type name, e.g. "OrderSession" instead of the full module path
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let item = self.store.entry(id.clone()).or_insert_with(|| {
                        debug!(entity_type, %id, "Spawned");
                        T::spawn(id.clone())
                    });

                    let result = item
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => debug!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }

                    if item.is_dormant() {
                        item.on_evict(&context).await;
                        self.store.remove(&id);
                        debug!(entity_type, %id, size = self.store.len(), "Evicted");
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Count { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
