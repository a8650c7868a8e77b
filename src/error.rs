use thiserror::Error;

use crate::domain::ProductId;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Quantity must be greater than 0, got {0}")]
    InvalidQuantity(i64),
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}
