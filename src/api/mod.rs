//! HTTP surface over the cart service.
//!
//! - `GET /health`: liveness, always `{"status":"healthy"}`
//! - `GET /products`: the catalog in seed order
//! - `GET /cart`: cart lines in insertion order
//! - `POST /cart`: `{"product_id": int, "quantity": int}`; merges into the cart
//!
//! Handlers hold no state of their own; everything goes through [`CartClient`].

use std::future::Future;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::clients::CartClient;
use crate::domain::{CartItem, Product, ProductId};
use crate::error::CartError;

/// Body of `POST /cart`. Absent fields, and a `null` body, decode as 0.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    pub quantity: i64,
}

#[derive(Debug, Serialize)]
pub struct AddToCartResponse {
    pub message: &'static str,
    pub cart: Vec<CartItem>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct MessageBody {
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct DecodeErrorBody {
    error: String,
}

/// Everything a handler can fail with.
#[derive(Debug)]
pub enum ApiError {
    /// The request body could not be decoded.
    Malformed(String),
    Cart(CartError),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Malformed(e.to_string())
    }
}

impl From<CartError> for ApiError {
    fn from(e: CartError) -> Self {
        ApiError::Cart(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Malformed(error) => {
                (StatusCode::BAD_REQUEST, Json(DecodeErrorBody { error })).into_response()
            }
            ApiError::Cart(e) => e.into_response(),
        }
    }
}

impl IntoResponse for CartError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            CartError::InvalidQuantity(_) => {
                (StatusCode::BAD_REQUEST, "Quantity must be greater than 0")
            }
            CartError::ProductNotFound(_) => (StatusCode::NOT_FOUND, "Product not found"),
            CartError::ActorCommunication(_) => {
                error!(error = %self, "Cart service unreachable");
                (StatusCode::SERVICE_UNAVAILABLE, "Cart service unavailable")
            }
        };
        (status, Json(MessageBody { message })).into_response()
    }
}

/// Build the router (separated for testing).
pub fn router(client: CartClient) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/products", get(list_products))
        .route("/cart", get(list_cart).post(add_to_cart))
        .layer(TraceLayer::new_for_http())
        .with_state(client)
}

/// Serve the API on `listener` until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    client: CartClient,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    info!(addr = %addr, "Cart API listening");
    axum::serve(listener, router(client))
        .with_graceful_shutdown(shutdown)
        .await
}

// ============================================================================
// Handlers
// ============================================================================

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

async fn list_products(State(client): State<CartClient>) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(client.list_products().await?))
}

async fn list_cart(State(client): State<CartClient>) -> Result<Json<Vec<CartItem>>, ApiError> {
    Ok(Json(client.list_cart().await?))
}

/// The body is decoded as JSON whatever the `Content-Type` header says.
async fn add_to_cart(
    State(client): State<CartClient>,
    body: Bytes,
) -> Result<Json<AddToCartResponse>, ApiError> {
    let request = serde_json::from_slice::<Option<AddToCartRequest>>(&body)?.unwrap_or_default();
    let (cart, outcome) = client
        .add_to_cart(request.product_id, request.quantity)
        .await?;
    Ok(Json(AddToCartResponse {
        message: outcome.message(),
        cart,
    }))
}
