use tracing::{error, info, instrument};

use crate::actors::CartService;
use crate::clients::CartClient;
use crate::domain::CartSession;

/// Starts the cart service, hands out its client and shuts it down again.
pub struct CartSystem {
    pub cart_client: CartClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CartSystem {
    /// Moves `session` into a freshly spawned [`CartService`].
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(name = "cart_system", skip(session))]
    pub fn new(session: CartSession, buffer_size: usize) -> Self {
        info!("Starting cart system");

        let (cart_service, cart_client) = CartService::new(buffer_size, session);
        let handles = vec![tokio::spawn(cart_service.run())];

        info!("Cart system started successfully");

        Self {
            cart_client,
            handles,
        }
    }

    /// Stops the service and waits for its task to finish.
    ///
    /// Join errors are logged; shutdown still completes.
    #[instrument(skip(self))]
    pub async fn shutdown(self) {
        info!("Shutting down cart system");

        if let Err(e) = self.cart_client.shutdown().await {
            error!(error = %e, "Shutdown request not delivered");
        }

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Service shutdown error");
            }
        }

        info!("Cart system shutdown complete");
    }
}
