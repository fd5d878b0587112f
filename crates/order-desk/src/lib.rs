//! # Order Desk
//!
//! Order-taking core for a small food-supply store that sells over chat. Customers walk
//! through a short conversation (pick a product, give a quantity, confirm) and the
//! resulting orders land in a shared registry that an operator can list.
//!
//! - [`catalog`]: the fixed product list
//! - [`session_actor`]: per-customer ordering state machine, run on
//!   [`actor_framework`] actors
//! - [`registry`]: latest confirmed order per customer
//! - [`dispatcher`]: routes customer messages to their session
//! - [`operator_view`]: read-only listing for the operator
//! - [`transport`]: inbox/outbox seam and the listener tasks
//! - [`lifecycle`]: start-up and shutdown

pub mod catalog;
pub mod clients;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod operator_view;
pub mod registry;
pub mod reply;
pub mod session_actor;
pub mod transport;
