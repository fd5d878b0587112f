//! # Session Client
//!
//! Provides a high-level API for interacting with one shard of [`OrderSession`] actors.
//! It wraps a `ResourceClient<OrderSession>` and maps framework failures to
//! [`SessionError`].

use crate::model::CustomerId;
use crate::reply::Reply;
use crate::session_actor::{OrderSession, SessionAction, SessionError};
use actor_framework::{ActorClient, FrameworkError, PendingResponse, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for one session actor.
#[derive(Clone)]
pub struct SessionClient {
    inner: ResourceClient<OrderSession>,
}

/// A reply that has been queued behind earlier messages but not yet produced.
#[derive(Debug)]
pub struct PendingReply {
    response: PendingResponse<Reply>,
}

impl PendingReply {
    pub async fn wait(self) -> Result<Reply, SessionError> {
        self.response.wait().await.map_err(SessionClient::map_error)
    }
}

impl SessionClient {
    pub fn new(inner: ResourceClient<OrderSession>) -> Self {
        Self { inner }
    }

    /// Queues `action` for the customer's session and returns without waiting for it.
    #[instrument(skip(self, action))]
    pub async fn submit(
        &self,
        customer_id: CustomerId,
        action: SessionAction,
    ) -> Result<PendingReply, SessionError> {
        debug!(?action, "Submitting");
        let response = self
            .inner
            .submit_action(customer_id, action)
            .await
            .map_err(Self::map_error)?;
        Ok(PendingReply { response })
    }

    pub async fn handle(&self, customer_id: CustomerId, action: SessionAction) -> Result<Reply, SessionError> {
        self.submit(customer_id, action).await?.wait().await
    }
}

#[async_trait]
impl ActorClient<OrderSession> for SessionClient {
    type Error = SessionError;

    fn inner(&self) -> &ResourceClient<OrderSession> {
        &self.inner
    }

    /// Entity failures keep their [`SessionError`]; anything else is a communication error.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<SessionError>() {
            Some(session_error) => session_error.clone(),
            None => SessionError::ActorCommunicationError(e.to_string()),
        }
    }
}
