mod actors;
mod api;
mod app_system;
mod clients;
mod domain;
mod error;
mod messages;

#[cfg(test)]
mod mock_framework;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::app_system::{setup_tracing, CartSystem, Config};
use crate::domain::CartSession;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting cart service");

    let config = Config::from_env()?;

    // Start the cart service with the seeded catalog and cart
    let system = CartSystem::new(CartSession::seeded(), config.buffer_size);

    let listener = match TcpListener::bind(config.bind_addr()?).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, "Failed to bind listener");
            system.shutdown().await;
            return Err(e.into());
        }
    };

    let served = api::serve(listener, system.cart_client.clone(), shutdown_signal()).await;

    // Stop the service even if the server failed
    system.shutdown().await;
    served?;

    info!("Cart service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Cannot listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
