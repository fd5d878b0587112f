//! # Catalog
//!
//! The fixed, read-only set of products customers can order. Built once at startup and
//! shared behind an `Arc`; there are no write operations.

use crate::model::{Product, ProductId};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("Duplicate product id: {0}")]
    DuplicateId(ProductId),

    #[error("Product {0} must have a positive unit price")]
    InvalidPrice(ProductId),

    #[error("Invalid product id {0:?}; expected P followed by three digits")]
    InvalidId(String),
}

/// Kana Foods products in display order; prices in birr.
pub const KANA_FOODS: [(&str, &str, u32); 5] = [
    ("P001", "Mozzorel Cheese", 800),
    ("P002", "Provolone Cheese", 930),
    ("P003", "Table Butter", 240),
    ("P004", "Chicken", 650),
    ("P005", "Breast Chicken", 920),
];

#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from products in display order.
    ///
    /// Rejects duplicate IDs and zero prices, so every lookup result is orderable.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        for (index, product) in products.iter().enumerate() {
            if product.unit_price == 0 {
                return Err(CatalogError::InvalidPrice(product.id.clone()));
            }
            if products[..index].iter().any(|p| p.id == product.id) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        Ok(Self { products })
    }

    /// Builds a catalog from `(id, name, unit price)` rows, validating each id.
    pub fn from_entries(entries: &[(&str, &str, u32)]) -> Result<Self, CatalogError> {
        let products = entries
            .iter()
            .map(|&(id, name, price)| {
                ProductId::parse(id)
                    .map(|id| Product::new(id, name, price))
                    .ok_or_else(|| CatalogError::InvalidId(id.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(products)
    }

    /// The Kana Foods product list.
    pub fn kana_foods() -> Result<Self, CatalogError> {
        Self::from_entries(&KANA_FOODS)
    }

    pub fn lookup(&self, id: &ProductId) -> Result<&Product, CatalogError> {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    /// All products, in the order they were defined.
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(text: &str) -> ProductId {
        ProductId::parse(text).unwrap()
    }

    #[test]
    fn test_kana_foods_catalog() {
        let catalog = Catalog::kana_foods().unwrap();
        assert_eq!(catalog.list_all().len(), 5);

        let cheese = catalog.lookup(&id("P001")).unwrap();
        assert_eq!(cheese.name, "Mozzorel Cheese");
        assert_eq!(cheese.unit_price, 800);

        let order: Vec<_> = catalog.list_all().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(order, ["P001", "P002", "P003", "P004", "P005"]);
    }

    #[test]
    fn test_lookup_unknown_id() {
        let catalog = Catalog::kana_foods().unwrap();
        assert_eq!(
            catalog.lookup(&id("P999")),
            Err(CatalogError::NotFound(id("P999")))
        );
    }

    #[test]
    fn test_new_rejects_bad_products() {
        let dup = Catalog::new(vec![
            Product::new(id("P001"), "A", 1),
            Product::new(id("P001"), "B", 2),
        ]);
        assert!(matches!(dup, Err(CatalogError::DuplicateId(_))));

        let free = Catalog::new(vec![Product::new(id("P002"), "Free", 0)]);
        assert!(matches!(free, Err(CatalogError::InvalidPrice(_))));
    }

    #[test]
    fn test_from_entries_surfaces_every_problem() {
        assert_eq!(
            Catalog::from_entries(&[("P001", "Cheese", 800), ("X01", "Butter", 240)]).unwrap_err(),
            CatalogError::InvalidId("X01".to_string())
        );
        assert_eq!(
            Catalog::from_entries(&[("P001", "Cheese", 800), ("p001", "Again", 900)]).unwrap_err(),
            CatalogError::DuplicateId(id("P001"))
        );
        assert_eq!(
            Catalog::from_entries(&[("P004", "Chicken", 0)]).unwrap_err(),
            CatalogError::InvalidPrice(id("P004"))
        );
    }
}
