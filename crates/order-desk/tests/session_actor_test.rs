use async_trait::async_trait;
use order_desk::catalog::Catalog;
use order_desk::model::{CustomerId, Order, Storefront};
use order_desk::registry::{OrderRegistry, RegistryError};
use order_desk::session_actor::{self, SessionAction, SessionContext, SessionError};
use order_desk::clients::SessionClient;
use actor_framework::ActorClient;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A registry whose writes always fail.
#[derive(Default)]
struct FailingRegistry {
    writes: AtomicUsize,
}

#[async_trait]
impl OrderRegistry for FailingRegistry {
    async fn upsert(&self, _order: Order) -> Result<(), RegistryError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Err(RegistryError::Unavailable("write rejected".into()))
    }

    async fn get(&self, _customer_id: CustomerId) -> Result<Option<Order>, RegistryError> {
        Ok(None)
    }

    async fn list_all(&self) -> Result<Vec<Order>, RegistryError> {
        Ok(Vec::new())
    }
}

fn text(s: &str) -> SessionAction {
    SessionAction::from_message("Abebe", s)
}

/// Real session actor over a registry that rejects writes: the failure reaches the
/// caller with its type intact and the session is back at rest.
#[tokio::test]
async fn test_registry_failure_on_confirmation() {
    let registry = Arc::new(FailingRegistry::default());
    let ctx = SessionContext::new(Arc::new(Catalog::kana_foods().unwrap()), registry.clone(), Storefront::default());

    let (actor, generic_client) = session_actor::new(8);
    let client = SessionClient::new(generic_client);
    let handle = tokio::spawn(actor.run(ctx));

    for input in ["2", "P001", "3"] {
        client.handle(CustomerId(1), text(input)).await.unwrap();
    }
    assert_eq!(client.count().await.unwrap(), 1);

    let err = client.handle(CustomerId(1), text("yes")).await.unwrap_err();
    assert_eq!(err, SessionError::Registry(RegistryError::Unavailable("write rejected".into())));
    assert_eq!(registry.writes.load(Ordering::SeqCst), 1);

    assert!(client.get(CustomerId(1)).await.unwrap().is_none());
    assert_eq!(client.count().await.unwrap(), 0);

    drop(client);
    handle.await.unwrap();
}

/// Actions submitted back to back for one customer are applied in submission order.
#[tokio::test]
async fn test_submitted_turns_apply_in_order() {
    let registry = Arc::new(order_desk::registry::InMemoryOrderRegistry::new());
    let ctx = SessionContext::new(Arc::new(Catalog::kana_foods().unwrap()), registry.clone(), Storefront::default());

    let (actor, generic_client) = session_actor::new(8);
    let client = SessionClient::new(generic_client);
    let handle = tokio::spawn(actor.run(ctx));

    let mut pending = Vec::new();
    for input in ["2", "P003", "5", "yes"] {
        pending.push(client.submit(CustomerId(3), text(input)).await.unwrap());
    }
    let mut replies = Vec::new();
    for reply in pending {
        replies.push(reply.wait().await.unwrap());
    }

    assert!(replies[1].text.contains("Table Butter"));
    assert!(replies[2].text.contains("1200"));
    assert!(replies[3].text.starts_with("✅ Order placed!"));
    assert_eq!(registry.get(CustomerId(3)).await.unwrap().unwrap().total, 1200);

    drop(client);
    handle.await.unwrap();
}
