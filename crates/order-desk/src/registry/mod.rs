//! # Order Registry
//!
//! The shared store of the latest confirmed order per customer. It is the only piece of
//! mutable state shared between the customer flow and the operator view.
//!
//! The store is a port: sessions and views hold an `Arc<dyn OrderRegistry>` and never know
//! which implementation is behind it. [`InMemoryOrderRegistry`] is the one shipped here;
//! a durable store can be swapped in without touching session logic.

pub mod in_memory;

pub use in_memory::InMemoryOrderRegistry;

use crate::model::{CustomerId, Order};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    /// The backing store could not be reached.
    #[error("Order registry unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait OrderRegistry: Send + Sync {
    /// Stores `order` as the customer's current order, replacing any previous one.
    async fn upsert(&self, order: Order) -> Result<(), RegistryError>;

    async fn get(&self, customer_id: CustomerId) -> Result<Option<Order>, RegistryError>;

    /// Every stored order, least recently written first.
    async fn list_all(&self) -> Result<Vec<Order>, RegistryError>;
}

pub type SharedRegistry = Arc<dyn OrderRegistry>;
