//! # Mock Framework
//!
//! Utilities for testing code that talks to the cart service without running it.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_list_cart`] or [`expect_add_to_cart`] to assert
//! the request and script the reply.

use tokio::sync::mpsc;

use crate::clients::CartClient;
use crate::domain::{AddOutcome, CartItem, Product, ProductId};
use crate::error::CartError;
use crate::messages::{CartRequest, ServiceResponse};

/// Creates a client whose requests land on the returned receiver instead of
/// a running [`CartService`](crate::actors::CartService).
pub fn create_mock_client(buffer_size: usize) -> (CartClient, mpsc::Receiver<CartRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CartClient::new(sender), receiver)
}

pub async fn expect_list_products(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<ServiceResponse<Vec<Product>, CartError>> {
    match receiver.recv().await {
        Some(CartRequest::ListProducts { respond_to }) => Some(respond_to),
        _ => None,
    }
}

pub async fn expect_list_cart(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<ServiceResponse<Vec<CartItem>, CartError>> {
    match receiver.recv().await {
        Some(CartRequest::ListCart { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an AddToCart request
pub async fn expect_add_to_cart(
    receiver: &mut mpsc::Receiver<CartRequest>,
) -> Option<(
    ProductId,
    i64,
    ServiceResponse<(Vec<CartItem>, AddOutcome), CartError>,
)> {
    match receiver.recv().await {
        Some(CartRequest::AddToCart {
            product_id,
            quantity,
            respond_to,
        }) => Some((product_id, quantity, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let add_task = tokio::spawn(async move { client.add_to_cart(1, 2).await });

        let (product_id, quantity, responder) = expect_add_to_cart(&mut receiver)
            .await
            .expect("Expected AddToCart request");
        assert_eq!((product_id, quantity), (1, 2));
        responder
            .send(Ok((vec![CartItem::new(1, "Laptop", 2, 50000.0)], AddOutcome::Added)))
            .unwrap();

        let (items, outcome) = add_task.await.unwrap().unwrap();
        assert_eq!(outcome, AddOutcome::Added);
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn test_dropped_responder_is_a_communication_error() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.list_cart().await });

        let responder = expect_list_cart(&mut receiver).await.expect("Expected ListCart");
        drop(responder);

        assert_eq!(
            task.await.unwrap(),
            Err(CartError::ActorCommunication("Actor dropped".to_string()))
        );
    }
}
