//! # Actor Framework
//!
//! Building blocks for keyed, type-safe actor systems on Tokio.
//!
//! An actor owns a map of entities addressed by caller-supplied keys (a customer ID, a
//! device ID, ...). Entities are materialized lazily on the first action that names their
//! key and evicted as soon as they go dormant, which makes the framework a good fit for
//! conversational state: a session exists only while a conversation is in progress.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]): your state machine or business logic.
//! 2. **Runtime Layer** ([`ResourceActor`]): the mailbox loop; one request at a time.
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]): typed requests over channels.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task.
//! - Requests are processed **sequentially** within an actor, so two actions on the same
//!   key never overlap and are applied in mailbox order.
//! - Several actors run in **parallel**; shard keys across them to spread load.
//! - [`ResourceClient::submit_action`] returns a [`PendingResponse`] once the request is
//!   queued, which lets a caller pin the processing order before waiting for answers.
//!
//! ## Context Injection
//!
//! Dependencies are handed to `run(context)` instead of `new()`. The context is shared by
//! every entity in the actor:
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//! use std::sync::Arc;
//!
//! #[derive(Clone, Debug)] struct Greeter { id: String }
//! #[derive(Debug)] struct Greet;
//! #[derive(Debug, thiserror::Error)] #[error("greeter")] struct GreeterError;
//!
//! #[async_trait]
//! impl ActorEntity for Greeter {
//!     type Id = String;
//!     type Action = Greet;
//!     type ActionResult = String;
//!     type Context = Arc<String>; // the greeting, injected at run()
//!     type Error = GreeterError;
//!
//!     fn spawn(id: String) -> Self { Self { id } }
//!     async fn handle_action(&mut self, _: Greet, greeting: &Arc<String>) -> Result<String, GreeterError> {
//!         Ok(format!("{greeting}, {}", self.id))
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Greeter>::new(8);
//!     tokio::spawn(actor.run(Arc::new("Hello".to_string())));
//!     let reply = client.perform_action("Ada".into(), Greet).await.unwrap();
//!     assert_eq!(reply, "Hello, Ada");
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient` from canned expectations, for
//! testing the code around a client without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::{PendingResponse, ResourceClient};
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
