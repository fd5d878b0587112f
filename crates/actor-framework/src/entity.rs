//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every keyed entity (a chat session, a
//! cart, a device twin, …) must implement to be managed by the generic `ResourceActor`.
//!
//! Entities are addressed by a caller-supplied key rather than a generated ID. The actor
//! materializes an entity the first time an action names its key ([`ActorEntity::spawn`])
//! and drops it again as soon as the entity reports itself dormant
//! ([`ActorEntity::is_dormant`]). This keeps the store proportional to the number of
//! *active* conversations instead of every key ever seen.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::is_dormant`] defaults to `false` (entities live until the actor stops).
//! - [`ActorEntity::on_evict`] defaults to doing nothing.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any keyed entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` so that action handlers can perform asynchronous side
/// effects (e.g., writing to a shared store). The `Context` type is injected into every
/// hook at `run()` time, so dependencies are bound late rather than at construction.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The key that addresses this entity (e.g., a customer ID).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Enum representing the operations an entity understands.
    type Action: Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per entity rather than one per action: callers match on a single
    /// type, at the cost of some precision about which action can produce which variant.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build a fresh entity for a key that has no live entry in the store.
    fn spawn(id: Self::Id) -> Self;

    /// Handle an action addressed to this entity.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Whether the entity is back in its resting state and can be dropped from the store.
    ///
    /// Checked after every action. A dormant entity is indistinguishable from a freshly
    /// spawned one, so evicting it loses nothing.
    fn is_dormant(&self) -> bool {
        false
    }

    /// Called right before a dormant entity is removed from the store.
    async fn on_evict(&self, _ctx: &Self::Context) {}
}
