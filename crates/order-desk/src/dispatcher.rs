//! # Dispatcher
//!
//! Routes each customer message to the session actor that owns that customer. Customers
//! are spread over a fixed set of shards by [`CustomerId::shard`], so one customer always
//! lands on the same actor and is served in arrival order, while customers on different
//! shards are handled in parallel.

use crate::clients::{PendingReply, SessionClient};
use crate::model::CustomerId;
use crate::reply::Reply;
use crate::session_actor::{SessionAction, SessionError, SessionState};
use crate::transport::InboundEvent;
use actor_framework::ActorClient;
use tracing::instrument;

#[derive(Clone)]
pub struct Dispatcher {
    shards: Vec<SessionClient>,
}

impl Dispatcher {
    pub fn new(shards: Vec<SessionClient>) -> Self {
        Self { shards }
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    fn shard_for(&self, customer_id: CustomerId) -> Result<&SessionClient, SessionError> {
        if self.shards.is_empty() {
            return Err(SessionError::ActorCommunicationError("no session shards".to_string()));
        }
        self.shards
            .get(customer_id.shard(self.shards.len()))
            .ok_or_else(|| SessionError::ActorCommunicationError(format!("no shard for {customer_id}")))
    }

    /// Queues the message on the customer's session and returns the pending reply.
    ///
    /// Messages submitted in sequence for one customer are answered in that sequence.
    #[instrument(skip(self, event), fields(customer_id = %event.customer_id))]
    pub async fn submit(&self, event: InboundEvent) -> Result<PendingReply, SessionError> {
        let action = SessionAction::from_message(&event.display_name, &event.text);
        self.shard_for(event.customer_id)?
            .submit(event.customer_id, action)
            .await
    }

    /// Handles one message and waits for its reply.
    pub async fn handle(
        &self,
        customer_id: CustomerId,
        display_name: &str,
        raw_text: &str,
    ) -> Result<Reply, SessionError> {
        self.submit(InboundEvent::new(customer_id, display_name, raw_text))
            .await?
            .wait()
            .await
    }

    /// Current state of a customer's session. Customers with no live session are idle.
    pub async fn session_state(&self, customer_id: CustomerId) -> Result<SessionState, SessionError> {
        let session = self.shard_for(customer_id)?.get(customer_id).await?;
        Ok(session.map(|s| s.state).unwrap_or_default())
    }

    /// Number of customers currently part-way through an order.
    pub async fn active_sessions(&self) -> Result<usize, SessionError> {
        let mut total = 0;
        for shard in &self.shards {
            total += shard.count().await?;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;
    use crate::registry::RegistryError;
    use crate::session_actor::OrderSession;
    use actor_framework::mock::MockClient;
    use actor_framework::FrameworkError;

    fn dispatcher_over(mocks: &[MockClient<OrderSession>]) -> Dispatcher {
        Dispatcher::new(mocks.iter().map(|m| SessionClient::new(m.client())).collect())
    }

    #[tokio::test]
    async fn test_routes_by_shard() {
        let mut mocks = vec![MockClient::<OrderSession>::new(), MockClient::<OrderSession>::new()];
        mocks[1].expect_action(CustomerId(5)).return_ok(Reply::text("from shard 1"));
        mocks[0].expect_action(CustomerId(8)).return_ok(Reply::text("from shard 0"));
        let dispatcher = dispatcher_over(&mocks);

        let reply = dispatcher.handle(CustomerId(5), "Sara", "hi").await.unwrap();
        assert_eq!(reply.text, "from shard 1");
        let reply = dispatcher.handle(CustomerId(8), "Liya", "hi").await.unwrap();
        assert_eq!(reply.text, "from shard 0");

        for mock in &mocks {
            mock.verify();
        }
    }

    #[tokio::test]
    async fn test_closed_actor_is_communication_error() {
        let mut mock = MockClient::<OrderSession>::new();
        mock.expect_action(CustomerId(1)).return_err(FrameworkError::ActorClosed);
        let dispatcher = dispatcher_over(std::slice::from_ref(&mock));

        let err = dispatcher.handle(CustomerId(1), "Abebe", "2").await.unwrap_err();
        assert!(matches!(err, SessionError::ActorCommunicationError(_)));
        mock.verify();
    }

    #[tokio::test]
    async fn test_registry_failure_keeps_its_type() {
        let mut mock = MockClient::<OrderSession>::new();
        let failure = SessionError::Registry(RegistryError::Unavailable("disk full".into()));
        mock.expect_action(CustomerId(1))
            .return_err(FrameworkError::EntityError(Box::new(failure.clone())));
        let dispatcher = dispatcher_over(std::slice::from_ref(&mock));

        let err = dispatcher.handle(CustomerId(1), "Abebe", "yes").await.unwrap_err();
        assert_eq!(err, failure);
        mock.verify();
    }

    #[tokio::test]
    async fn test_session_state_defaults_to_idle() {
        let mut mock = MockClient::<OrderSession>::new();
        mock.expect_get(CustomerId(3)).return_ok(None);
        let waiting = OrderSession {
            customer_id: CustomerId(4),
            state: SessionState::AwaitingQuantity {
                product_id: ProductId::parse("P002").unwrap(),
            },
        };
        mock.expect_get(CustomerId(4)).return_ok(Some(waiting.clone()));
        let dispatcher = dispatcher_over(std::slice::from_ref(&mock));

        assert_eq!(dispatcher.session_state(CustomerId(3)).await.unwrap(), SessionState::Idle);
        assert_eq!(dispatcher.session_state(CustomerId(4)).await.unwrap(), waiting.state);
        mock.verify();
    }

    #[tokio::test]
    async fn test_no_shards() {
        let dispatcher = Dispatcher::new(Vec::new());
        assert!(dispatcher.handle(CustomerId(1), "x", "1").await.is_err());
    }
}
