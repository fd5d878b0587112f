use crate::model::{CustomerId, Product, ProductId};
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderStatus {
    Confirmed,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Confirmed => f.write_str("Confirmed – preparing for dispatch"),
        }
    }
}

/// A confirmed customer order, as kept in the [`OrderRegistry`](crate::registry::OrderRegistry).
///
/// Orders are only ever built by the confirmation step of an
/// [`OrderSession`](crate::session_actor::OrderSession), from a product that was validated
/// against the catalog and a positive quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub product_id: ProductId,
    pub quantity: u32,
    pub total: u64,
    pub status: OrderStatus,
}

impl Order {
    /// Confirms an order for `quantity` units of `product`.
    ///
    /// The total is computed here, once, from the product's unit price. A blank
    /// `customer_name` becomes `Customer <id>` so every order stays attributable.
    pub fn confirmed(
        customer_id: CustomerId,
        customer_name: impl Into<String>,
        product: &Product,
        quantity: u32,
    ) -> Self {
        let customer_name = customer_name.into().trim().to_string();
        let customer_name = if customer_name.is_empty() {
            format!("Customer {customer_id}")
        } else {
            customer_name
        };
        Self {
            customer_id,
            customer_name,
            product_id: product.id.clone(),
            quantity,
            total: product.total_for(quantity),
            status: OrderStatus::Confirmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn butter() -> Product {
        Product::new(ProductId::parse("P003").unwrap(), "Table Butter", 240)
    }

    #[test]
    fn test_confirmed_computes_total() {
        let order = Order::confirmed(CustomerId(3), " Sara ", &butter(), 5);
        assert_eq!(order.customer_name, "Sara");
        assert_eq!(order.total, 1200);
        assert_eq!(order.status, OrderStatus::Confirmed);
    }

    #[test]
    fn test_blank_name_falls_back_to_customer_id() {
        assert_eq!(Order::confirmed(CustomerId(42), "", &butter(), 1).customer_name, "Customer 42");
        assert_eq!(Order::confirmed(CustomerId(-7), "   ", &butter(), 1).customer_name, "Customer -7");
    }
}
