//! Channel-backed transport.

use super::{Inbox, Outbox, TransportError};
use async_trait::async_trait;
use tokio::sync::mpsc;

pub struct MemoryInbox<E> {
    receiver: mpsc::Receiver<E>,
}

#[async_trait]
impl<E: Send> Inbox<E> for MemoryInbox<E> {
    async fn recv(&mut self) -> Option<E> {
        self.receiver.recv().await
    }
}

#[derive(Clone)]
pub struct MemoryOutbox<M> {
    sender: mpsc::UnboundedSender<M>,
}

#[async_trait]
impl<M: Send + 'static> Outbox<M> for MemoryOutbox<M> {
    async fn send(&self, message: M) -> Result<(), TransportError> {
        self.sender.send(message).map_err(|_| TransportError::Closed)
    }
}

/// An inbox plus the sender that feeds it. Dropping every sender closes the inbox.
pub fn inbox<E>(capacity: usize) -> (mpsc::Sender<E>, MemoryInbox<E>) {
    let (sender, receiver) = mpsc::channel(capacity);
    (sender, MemoryInbox { receiver })
}

/// An outbox plus the receiver that collects what is sent to it.
pub fn outbox<M>() -> (MemoryOutbox<M>, mpsc::UnboundedReceiver<M>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (MemoryOutbox { sender }, receiver)
}
