use serde::Serialize;

pub type ProductId = i64;

/// Represents a purchasable item in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    /// Carried and served, never consulted by the cart rules.
    pub stock: i64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, stock: i64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
        }
    }
}
