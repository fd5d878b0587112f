//! # Order Desk Lifecycle
//!
//! Starting, wiring and stopping the session actors.
//!
//! Actors are created first and receive their dependencies when they are run: every shard
//! gets a clone of the same [`SessionContext`](crate::session_actor::SessionContext), which
//! holds the catalog, the shared order registry and the store front. The
//! [`OperatorView`](crate::operator_view::OperatorView) reads the same registry.
//!
//! ## Graceful Shutdown
//!
//! 1. **Close the inboxes** - listeners drain their queued replies and return
//! 2. **Drop the dispatcher** - the actors' mailboxes close
//! 3. **Await the actor tasks** - each logs `Shutdown` with the sessions still live
//!
//! Sessions are not persisted, so any order still in progress at shutdown is lost.

pub mod order_desk;

pub use order_desk::*;
