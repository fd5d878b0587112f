//! [`ActorEntity`] implementation for [`OrderSession`].
//!
//! Sessions are keyed by [`CustomerId`]. A session is spawned on a customer's first
//! message and evicted whenever it is back at rest, so an actor only holds customers who
//! are part-way through an order.

use super::actions::SessionAction;
use super::error::SessionError;
use super::replies;
use super::state::{OrderSession, Step};
use crate::catalog::Catalog;
use crate::model::{CustomerId, Storefront};
use crate::registry::SharedRegistry;
use crate::reply::Reply;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Shared dependencies injected into every session actor at `run` time.
#[derive(Clone)]
pub struct SessionContext {
    pub catalog: Arc<Catalog>,
    pub registry: SharedRegistry,
    pub storefront: Arc<Storefront>,
}

impl SessionContext {
    pub fn new(catalog: Arc<Catalog>, registry: SharedRegistry, storefront: Storefront) -> Self {
        Self {
            catalog,
            registry,
            storefront: Arc::new(storefront),
        }
    }
}

#[async_trait]
impl ActorEntity for OrderSession {
    type Id = CustomerId;
    type Action = SessionAction;
    type ActionResult = Reply;
    type Context = SessionContext;
    type Error = SessionError;

    fn spawn(id: CustomerId) -> Self {
        OrderSession::new(id)
    }

    /// Advances the state machine and carries out any registry effect it asks for.
    ///
    /// When the registry write fails on confirmation the session has already returned to
    /// rest; the customer starts over rather than being left at a prompt that cannot
    /// succeed.
    async fn handle_action(
        &mut self,
        action: SessionAction,
        ctx: &SessionContext,
    ) -> Result<Reply, SessionError> {
        let from = self.state.name();
        let step = self.advance(action, &ctx.catalog, &ctx.storefront);
        debug!(customer_id = %self.customer_id, from, to = self.state.name(), "Transition");

        match step {
            Step::Reply(reply) => Ok(reply),
            Step::Place { order, reply } => {
                let (product_id, quantity, total) = (order.product_id.clone(), order.quantity, order.total);
                ctx.registry.upsert(order).await?;
                info!(customer_id = %self.customer_id, %product_id, quantity, total, "Order confirmed");
                Ok(reply)
            }
            Step::Track => {
                let order = ctx.registry.get(self.customer_id).await?;
                Ok(replies::track(order.as_ref(), &ctx.catalog))
            }
        }
    }

    fn is_dormant(&self) -> bool {
        self.is_idle()
    }
}
