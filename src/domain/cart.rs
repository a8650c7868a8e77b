use serde::Serialize;

use crate::error::CartError;

use super::product::{Product, ProductId};

/// One line in the cart. There is never more than one line per product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItem {
    pub product_id: ProductId,
    /// Captured from the product when the line was first inserted.
    pub name: String,
    pub quantity: i64,
    /// Line total: `quantity` times the product's unit price.
    pub price: f64,
}

impl CartItem {
    pub fn new(product_id: ProductId, name: impl Into<String>, quantity: i64, price: f64) -> Self {
        Self {
            product_id,
            name: name.into(),
            quantity,
            price,
        }
    }
}

/// Whether an add created a new line or merged into an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Updated,
}

impl AddOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            AddOutcome::Added => "Added to cart",
            AddOutcome::Updated => "Updated cart",
        }
    }
}

/// Cart lines in first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// The cart the service starts with.
    pub fn seeded() -> Self {
        Self::new(vec![
            CartItem::new(2, "Headphones", 1, 1500.0),
            CartItem::new(3, "Mouse", 2, 1400.0),
        ])
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Merges `quantity` of `product` into the cart.
    ///
    /// The caller has already validated `quantity > 0`. The line price is
    /// always recomputed from the product's unit price, never accumulated.
    /// A merge whose total would overflow is rejected and leaves the line as it was.
    pub fn merge(&mut self, product: &Product, quantity: i64) -> Result<AddOutcome, CartError> {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity = item
                .quantity
                .checked_add(quantity)
                .ok_or(CartError::InvalidQuantity(quantity))?;
            item.price = item.quantity as f64 * product.price;
            return Ok(AddOutcome::Updated);
        }

        self.items.push(CartItem::new(
            product.id,
            product.name.clone(),
            quantity,
            quantity as f64 * product.price,
        ));
        Ok(AddOutcome::Added)
    }
}
