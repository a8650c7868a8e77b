use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::clients::CartClient;
use crate::domain::{AddOutcome, CartItem, CartSession, Product, ProductId};
use crate::error::CartError;
use crate::messages::{CartRequest, ServiceResponse};

// =============================================================================
// CART SERVICE
// =============================================================================

/// Single owner of the [`CartSession`].
///
/// Requests are handled one at a time in arrival order, so an add-to-cart
/// always finishes its scan and mutation before the next request is seen.
pub struct CartService {
    receiver: mpsc::Receiver<CartRequest>,
    session: CartSession,
}

impl CartService {
    pub fn new(buffer_size: usize, session: CartSession) -> (Self, CartClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, session };
        let client = CartClient::new(sender);
        (service, client)
    }

    #[instrument(name = "cart_service", skip(self))]
    pub async fn run(mut self) {
        info!("CartService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CartRequest::ListProducts { respond_to } => {
                    self.handle_list_products(respond_to);
                }
                CartRequest::ListCart { respond_to } => {
                    self.handle_list_cart(respond_to);
                }
                CartRequest::AddToCart {
                    product_id,
                    quantity,
                    respond_to,
                } => {
                    self.handle_add_to_cart(product_id, quantity, respond_to);
                }
                CartRequest::Shutdown => {
                    info!("CartService shutting down");
                    break;
                }
                #[cfg(test)]
                CartRequest::GetLineCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.session.list_cart().len()));
                }
            }
        }

        info!("CartService stopped");
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_products(&self, respond_to: ServiceResponse<Vec<Product>, CartError>) {
        debug!("Processing list_products request");

        let products = self.session.list_products();
        info!(product_count = products.len(), "Listed products");

        let _ = respond_to.send(Ok(products));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_cart(&self, respond_to: ServiceResponse<Vec<CartItem>, CartError>) {
        debug!("Processing list_cart request");

        let items = self.session.list_cart();
        info!(line_count = items.len(), "Listed cart");

        let _ = respond_to.send(Ok(items));
    }

    #[instrument(fields(product_id = %product_id, quantity = %quantity), skip(self, respond_to))]
    fn handle_add_to_cart(
        &mut self,
        product_id: ProductId,
        quantity: i64,
        respond_to: ServiceResponse<(Vec<CartItem>, AddOutcome), CartError>,
    ) {
        debug!("Processing add_to_cart request");

        let result = self.session.add_to_cart(product_id, quantity);
        match &result {
            Ok((items, outcome)) => {
                info!(outcome = ?outcome, line_count = items.len(), "Cart updated")
            }
            Err(e) => warn!(error = %e, "Add to cart rejected"),
        }

        let _ = respond_to.send(result);
    }
}
