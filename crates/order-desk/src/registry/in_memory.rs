use crate::model::{CustomerId, Order};
use crate::registry::{OrderRegistry, RegistryError};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// A thread-safe in-memory order registry.
///
/// One `Mutex` guards the whole list. Orders are kept in write order: an upsert removes
/// the customer's previous order and appends the new one, so `list_all` runs from least to
/// most recently written.
#[derive(Default, Clone)]
pub struct InMemoryOrderRegistry {
    orders: Arc<Mutex<Vec<Order>>>,
}

impl InMemoryOrderRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRegistry for InMemoryOrderRegistry {
    async fn upsert(&self, order: Order) -> Result<(), RegistryError> {
        let mut orders = self.orders.lock().await;
        let replaced = match orders.iter().position(|o| o.customer_id == order.customer_id) {
            Some(index) => {
                orders.remove(index);
                true
            }
            None => false,
        };
        debug!(customer_id = %order.customer_id, replaced, "Order stored");
        orders.push(order);
        Ok(())
    }

    async fn get(&self, customer_id: CustomerId) -> Result<Option<Order>, RegistryError> {
        let orders = self.orders.lock().await;
        Ok(orders.iter().find(|o| o.customer_id == customer_id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Order>, RegistryError> {
        let orders = self.orders.lock().await;
        Ok(orders.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, ProductId};

    fn order(customer: i64, name: &str, quantity: u32) -> Order {
        let product = Product::new(ProductId::parse("P003").unwrap(), "Table Butter", 240);
        Order::confirmed(CustomerId(customer), name, &product, quantity)
    }

    #[tokio::test]
    async fn test_upsert_and_get() {
        let registry = InMemoryOrderRegistry::new();
        assert!(registry.get(CustomerId(1)).await.unwrap().is_none());

        registry.upsert(order(1, "Abebe", 2)).await.unwrap();
        let stored = registry.get(CustomerId(1)).await.unwrap().unwrap();
        assert_eq!(stored.quantity, 2);
        assert_eq!(stored.total, 480);

        assert!(registry.get(CustomerId(2)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_upsert_replaces_and_moves_to_end() {
        let registry = InMemoryOrderRegistry::new();
        registry.upsert(order(1, "Abebe", 1)).await.unwrap();
        registry.upsert(order(2, "Sara", 1)).await.unwrap();
        registry.upsert(order(1, "Abebe", 5)).await.unwrap();

        let all = registry.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].customer_id, CustomerId(2));
        assert_eq!(all[1].customer_id, CustomerId(1));
        assert_eq!(all[1].quantity, 5);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let registry = InMemoryOrderRegistry::new();
        let other = registry.clone();
        registry.upsert(order(9, "Liya", 3)).await.unwrap();
        assert_eq!(other.list_all().await.unwrap().len(), 1);
    }
}
