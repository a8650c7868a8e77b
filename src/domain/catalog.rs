use super::product::{Product, ProductId};

/// The fixed, ordered list of purchasable products.
///
/// Built once when the session starts and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The catalog the service starts with.
    pub fn seeded() -> Self {
        Self::new(vec![
            Product::new(1, "Laptop", 25000.0, 5),
            Product::new(2, "Headphones", 1500.0, 10),
            Product::new(3, "Mouse", 700.0, 15),
        ])
    }

    /// All products in seed order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog_order_and_attributes() {
        let catalog = Catalog::seeded();
        let ids: Vec<ProductId> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let laptop = &catalog.products()[0];
        assert_eq!(laptop.name, "Laptop");
        assert_eq!(laptop.price, 25000.0);
        assert_eq!(laptop.stock, 5);
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.find_by_id(3).map(|p| p.name.as_str()), Some("Mouse"));
        assert!(catalog.find_by_id(999).is_none());
        assert!(catalog.find_by_id(0).is_none());
    }
}
