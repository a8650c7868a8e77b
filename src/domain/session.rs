use crate::error::CartError;

use super::cart::{AddOutcome, Cart, CartItem};
use super::catalog::Catalog;
use super::product::{Product, ProductId};

/// The catalog and cart that one running service operates on.
///
/// Owned by exactly one [`CartService`](crate::actors::CartService) at runtime,
/// so every mutation below runs without interleaving.
#[derive(Debug, Clone)]
pub struct CartSession {
    catalog: Catalog,
    cart: Cart,
}

impl Default for CartSession {
    fn default() -> Self {
        Self::seeded()
    }
}

impl CartSession {
    pub fn new(catalog: Catalog, cart: Cart) -> Self {
        Self { catalog, cart }
    }

    pub fn seeded() -> Self {
        Self::new(Catalog::seeded(), Cart::seeded())
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.catalog.products().to_vec()
    }

    pub fn list_cart(&self) -> Vec<CartItem> {
        self.cart.items().to_vec()
    }

    /// Adds `quantity` of a catalog product to the cart.
    ///
    /// Quantity is checked before the product lookup, and neither failure
    /// touches the cart.
    pub fn add_to_cart(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<(Vec<CartItem>, AddOutcome), CartError> {
        if quantity <= 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }

        let product = self
            .catalog
            .find_by_id(product_id)
            .ok_or(CartError::ProductNotFound(product_id))?;

        let outcome = self.cart.merge(product, quantity)?;
        Ok((self.list_cart(), outcome))
    }
}
