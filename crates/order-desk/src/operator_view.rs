//! # Operator View
//!
//! Read-only projection of the [`OrderRegistry`](crate::registry::OrderRegistry) for the
//! operator channel. Nothing here writes to the registry.

use crate::catalog::Catalog;
use crate::error::DeskError;
use crate::model::{CustomerId, Order, OrderStatus, Storefront};
use crate::registry::{RegistryError, SharedRegistry};
use crate::reply::Reply;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};

/// One exported order, with the product name resolved.
#[derive(Debug, Serialize)]
struct OrderLine<'a> {
    customer_id: CustomerId,
    customer_name: &'a str,
    product_id: &'a str,
    product_name: &'a str,
    quantity: u32,
    total: u64,
    currency: &'a str,
    status: OrderStatus,
}

#[derive(Clone)]
pub struct OperatorView {
    registry: SharedRegistry,
    catalog: Arc<Catalog>,
    storefront: Arc<Storefront>,
}

impl OperatorView {
    pub fn new(registry: SharedRegistry, catalog: Arc<Catalog>, storefront: Arc<Storefront>) -> Self {
        Self {
            registry,
            catalog,
            storefront,
        }
    }

    fn product_name<'a>(&'a self, order: &'a Order) -> &'a str {
        self.catalog
            .lookup(&order.product_id)
            .map(|p| p.name.as_str())
            .unwrap_or(order.product_id.as_str())
    }

    /// Human-readable listing of every stored order, least recently updated first.
    pub async fn render(&self) -> Result<String, RegistryError> {
        let orders = self.registry.list_all().await?;
        if orders.is_empty() {
            return Ok("No orders yet.".to_string());
        }

        let mut text = String::from("📦 Current Orders:");
        for order in &orders {
            text.push_str(&format!(
                "\n- {}: {} × {} ({} {})",
                order.customer_name,
                self.product_name(order),
                order.quantity,
                order.total,
                self.storefront.currency
            ));
        }
        Ok(text)
    }

    /// Every stored order as a pretty-printed JSON array.
    pub async fn render_json(&self) -> Result<String, DeskError> {
        let orders = self.registry.list_all().await?;
        let lines: Vec<OrderLine<'_>> = orders
            .iter()
            .map(|order| OrderLine {
                customer_id: order.customer_id,
                customer_name: &order.customer_name,
                product_id: order.product_id.as_str(),
                product_name: self.product_name(order),
                quantity: order.quantity,
                total: order.total,
                currency: &self.storefront.currency,
                status: order.status,
            })
            .collect();
        Ok(serde_json::to_string_pretty(&lines)?)
    }

    fn help(&self) -> String {
        format!(
            "👋 Welcome to {} Admin Dashboard.\n{}",
            self.storefront.name,
            Self::commands()
        )
    }

    fn commands() -> &'static str {
        "Commands:\n\
         /orders – View all customer orders\n\
         /export – Download all orders as JSON\n\
         /help – Show this message"
    }

    /// Answers one operator message.
    #[instrument(skip(self))]
    pub async fn respond(&self, text: &str) -> Result<Reply, DeskError> {
        let command = text
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .split('@')
            .next()
            .unwrap_or_default()
            .to_lowercase();
        debug!(%command, "Operator command");

        let reply = match command.as_str() {
            "/start" | "/help" => self.help(),
            "/orders" => self.render().await?,
            "/export" => self.render_json().await?,
            _ => Self::commands().to_string(),
        };
        Ok(Reply::text(reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, ProductId};
    use crate::registry::{InMemoryOrderRegistry, OrderRegistry};
    use async_trait::async_trait;

    fn view_over(registry: SharedRegistry) -> OperatorView {
        OperatorView::new(
            registry,
            Arc::new(Catalog::kana_foods().unwrap()),
            Arc::new(Storefront::default()),
        )
    }

    fn order(customer: i64, name: &str, product: &str, price: u32, quantity: u32) -> Order {
        let product = Product::new(ProductId::parse(product).unwrap(), "unused", price);
        Order::confirmed(CustomerId(customer), name, &product, quantity)
    }

    #[tokio::test]
    async fn test_empty_registry() {
        let view = view_over(Arc::new(InMemoryOrderRegistry::new()));
        assert_eq!(view.render().await.unwrap(), "No orders yet.");
        assert_eq!(view.render_json().await.unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_listing_uses_catalog_names() {
        let registry = Arc::new(InMemoryOrderRegistry::new());
        registry.upsert(order(1, "Abebe", "P001", 800, 3)).await.unwrap();
        registry.upsert(order(2, "Sara", "P003", 240, 2)).await.unwrap();
        let view = view_over(registry);

        assert_eq!(
            view.render().await.unwrap(),
            "📦 Current Orders:\n- Abebe: Mozzorel Cheese × 3 (2400 birr)\n- Sara: Table Butter × 2 (480 birr)"
        );

        let json: serde_json::Value = serde_json::from_str(&view.render_json().await.unwrap()).unwrap();
        assert_eq!(json[0]["product_name"], "Mozzorel Cheese");
        assert_eq!(json[0]["total"], 2400);
        assert_eq!(json[1]["customer_id"], 2);
        assert_eq!(json[1]["status"], "Confirmed");
    }

    #[tokio::test]
    async fn test_commands() {
        let view = view_over(Arc::new(InMemoryOrderRegistry::new()));

        let help = view.respond("/start").await.unwrap();
        assert!(help.text.starts_with("👋 Welcome to Kana Foods Admin Dashboard."));
        assert_eq!(view.respond("/HELP").await.unwrap(), help);
        assert_eq!(view.respond("/orders").await.unwrap().text, "No orders yet.");
        assert!(view.respond("hello").await.unwrap().text.starts_with("Commands:"));
    }

    struct DownRegistry;

    #[async_trait]
    impl OrderRegistry for DownRegistry {
        async fn upsert(&self, _order: Order) -> Result<(), RegistryError> {
            Err(RegistryError::Unavailable("down".into()))
        }
        async fn get(&self, _customer_id: CustomerId) -> Result<Option<Order>, RegistryError> {
            Err(RegistryError::Unavailable("down".into()))
        }
        async fn list_all(&self) -> Result<Vec<Order>, RegistryError> {
            Err(RegistryError::Unavailable("down".into()))
        }
    }

    #[tokio::test]
    async fn test_registry_failure_surfaces() {
        let view = view_over(Arc::new(DownRegistry));
        assert!(matches!(
            view.respond("/orders").await,
            Err(DeskError::Registry(RegistryError::Unavailable(_)))
        ));
    }
}
