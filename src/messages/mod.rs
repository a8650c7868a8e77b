use tokio::sync::oneshot;

use crate::domain::{AddOutcome, CartItem, Product, ProductId};
use crate::error::CartError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed messages for the cart service. Each variant includes parameters
/// and a oneshot channel for the response.
#[derive(Debug)]
pub enum CartRequest {
    ListProducts {
        respond_to: ServiceResponse<Vec<Product>, CartError>,
    },
    ListCart {
        respond_to: ServiceResponse<Vec<CartItem>, CartError>,
    },
    AddToCart {
        product_id: ProductId,
        quantity: i64,
        respond_to: ServiceResponse<(Vec<CartItem>, AddOutcome), CartError>,
    },
    Shutdown,
    #[cfg(test)]
    GetLineCount {
        respond_to: ServiceResponse<usize, CartError>,
    },
}
