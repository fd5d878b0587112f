//! Catalog product types.
//!
//! Products are immutable and defined once at startup; see
//! [`Catalog`](crate::catalog::Catalog) for the registry that holds them.
use serde::Serialize;
use std::fmt::Display;

/// Type-safe product identifier of the form `P` followed by three digits (`P001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProductId(String);

impl ProductId {
    /// Parses free text as a product ID.
    ///
    /// Surrounding whitespace is ignored and the leading `p` may be lowercase; the result
    /// is normalized to uppercase. Returns `None` unless the text is exactly one letter
    /// `P` followed by three ASCII digits.
    pub fn parse(text: &str) -> Option<Self> {
        let normalized = text.trim().to_ascii_uppercase();
        let (prefix, digits) = normalized.split_at_checked(1)?;
        if prefix == "P" && digits.len() == 3 && digits.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(normalized))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price of one unit in whole currency units. Always positive.
    pub unit_price: u32,
}

impl Product {
    /// Creates a new Product.
    ///
    /// # Arguments
    /// * `id` - Catalog identifier
    /// * `name` - Display name
    /// * `unit_price` - Positive price per unit
    pub fn new(id: ProductId, name: impl Into<String>, unit_price: u32) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
        }
    }

    /// Price of `quantity` units.
    pub fn total_for(&self, quantity: u32) -> u64 {
        u64::from(self.unit_price) * u64::from(quantity)
    }
}
