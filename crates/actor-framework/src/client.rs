//! # Generic Client
//!
//! This module defines the generic client for communicating with actors.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::{mpsc, oneshot};

/// ## ResourceClient
///
/// The `ResourceClient<T>` provides a type‑safe, async API for interacting with a
/// `ResourceActor<T>`. Requests travel over a Tokio mpsc channel and results come back on
/// oneshot channels. The client only holds a sender, so cloning it is cheap.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

/// A request that has been accepted into an actor's mailbox but not yet answered.
///
/// Splitting "enqueue" from "await the answer" lets a caller fix the processing order of
/// several requests (by enqueueing them one after another) while still waiting for the
/// answers concurrently.
#[derive(Debug)]
pub struct PendingResponse<R> {
    response: oneshot::Receiver<Result<R, FrameworkError>>,
}

impl<R> PendingResponse<R> {
    /// Wait for the actor's answer.
    pub async fn wait(self) -> Result<R, FrameworkError> {
        self.response
            .await
            .map_err(|_| FrameworkError::ActorDropped)?
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Enqueue an action without waiting for its result.
    ///
    /// Once this returns, the action is in the mailbox ahead of anything enqueued later.
    pub async fn submit_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<PendingResponse<T::ActionResult>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Action {
                id,
                action,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        Ok(PendingResponse { response })
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.submit_action(id, action).await?.wait().await
    }

    /// Number of live entities held by the actor.
    pub async fn count(&self) -> Result<usize, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Count { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
