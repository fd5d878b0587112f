//! # Session Actor
//!
//! One [`OrderSession`] per customer, managed by a [`ResourceActor`]. Messages for the same
//! customer are applied one at a time in mailbox order, which is what keeps each
//! customer's flow consistent when messages arrive in quick succession.
//!
//! ## Structure
//!
//! - [`actions`] - [`SessionAction`] and the text classifiers behind it
//! - [`state`] - the pure [`OrderSession`] state machine
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation and [`SessionContext`]
//! - [`replies`] - customer-facing texts
//! - [`error`] - [`SessionError`]
//!
//! ## Usage
//!
//! ```rust
//! use order_desk::catalog::Catalog;
//! use order_desk::model::{CustomerId, Storefront};
//! use order_desk::registry::InMemoryOrderRegistry;
//! use order_desk::session_actor::{self, SessionAction, SessionContext};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = session_actor::new(32);
//!     let ctx = SessionContext::new(
//!         Arc::new(Catalog::kana_foods().unwrap()),
//!         Arc::new(InMemoryOrderRegistry::new()),
//!         Storefront::default(),
//!     );
//!     tokio::spawn(actor.run(ctx));
//!
//!     let reply = client
//!         .perform_action(CustomerId(7), SessionAction::from_message("Abebe", "2"))
//!         .await
//!         .unwrap();
//!     assert!(reply.text.contains("PRODUCT ID"));
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;
pub mod replies;
pub mod state;

pub use actions::*;
pub use entity::*;
pub use error::*;
pub use state::*;

use actor_framework::{ResourceActor, ResourceClient};

/// Creates a session actor and its client, with a mailbox of `mailbox` requests.
pub fn new(mailbox: usize) -> (ResourceActor<OrderSession>, ResourceClient<OrderSession>) {
    ResourceActor::new(mailbox)
}
