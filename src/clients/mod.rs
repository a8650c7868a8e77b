use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::domain::{AddOutcome, CartItem, Product, ProductId};
use crate::error::CartError;
use crate::messages::CartRequest;

/// Generate client methods with oneshot channel boilerplate and automatic tracing.
/// Channel failures become `CartError::ActorCommunication`.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, CartError> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| CartError::ActorCommunication("Actor closed".to_string()))?;

                response.await.map_err(|_| CartError::ActorCommunication("Actor dropped".to_string()))?
            }
        }
    };
}

// =============================================================================
// CART CLIENT
// =============================================================================

/// Handle to the [`CartService`](crate::actors::CartService). Cheap to clone;
/// every clone talks to the same session.
#[derive(Clone)]
pub struct CartClient {
    sender: mpsc::Sender<CartRequest>,
}

impl CartClient {
    pub fn new(sender: mpsc::Sender<CartRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), CartError> {
        debug!("Sending shutdown request");
        self.sender
            .send(CartRequest::Shutdown)
            .await
            .map_err(|_| CartError::ActorCommunication("Actor closed".to_string()))
    }
}

client_method!(CartClient => fn list_products() -> Vec<Product> as CartRequest::ListProducts);
client_method!(CartClient => fn list_cart() -> Vec<CartItem> as CartRequest::ListCart);
client_method!(CartClient => fn add_to_cart(product_id: ProductId, quantity: i64) -> (Vec<CartItem>, AddOutcome) as CartRequest::AddToCart);

#[cfg(test)]
client_method!(CartClient => fn get_line_count() -> usize as CartRequest::GetLineCount);
