//! # Transport Seam
//!
//! The core never talks to a messaging service directly. Inbound messages arrive through
//! an [`Inbox`], replies leave through an [`Outbox`], and the two listener tasks in
//! [`listener`] connect them to the [`Dispatcher`](crate::dispatcher::Dispatcher) and the
//! [`OperatorView`](crate::operator_view::OperatorView).
//!
//! - [`memory`] - channel-backed inbox/outbox pair, used by tests and the console adapter
//! - [`console`] - stdin/stdout adapter for running the desk locally

pub mod console;
pub mod listener;
pub mod memory;

pub use listener::*;

use crate::model::CustomerId;
use crate::reply::Reply;
use async_trait::async_trait;
use thiserror::Error;

/// A customer message as delivered by the customer channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    pub customer_id: CustomerId,
    pub display_name: String,
    pub text: String,
}

impl InboundEvent {
    pub fn new(customer_id: CustomerId, display_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            customer_id,
            display_name: display_name.into(),
            text: text.into(),
        }
    }
}

/// A message typed on the operator channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorRequest {
    pub text: String,
}

/// A reply addressed to one customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerReply {
    pub customer_id: CustomerId,
    pub reply: Reply,
}

#[derive(Debug, Error)]
pub enum TransportError {
    /// The other side of the channel has gone away.
    #[error("Channel closed")]
    Closed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line that does not follow the console format.
    #[error("Malformed input line: {0:?}")]
    Malformed(String),
}

/// Source of inbound messages. `None` means the channel is closed for good.
#[async_trait]
pub trait Inbox<E>: Send {
    async fn recv(&mut self) -> Option<E>;
}

/// Sink for outbound messages.
#[async_trait]
pub trait Outbox<M>: Send + Sync {
    async fn send(&self, message: M) -> Result<(), TransportError>;
}
