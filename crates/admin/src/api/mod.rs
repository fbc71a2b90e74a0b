//! Remote orders API.
//!
//! The panel owns no order storage. Everything it shows comes from the
//! orders service through two calls:
//!
//! - `GET {base}/orders` - every order, unpaginated
//! - `DELETE {base}/orders/{id}` - remove one order
//!
//! [`OrdersApi`] is the seam between the view logic and the transport so the
//! controller and routes can run against an in-memory implementation in tests.

mod rest;

pub use rest::RestOrdersClient;

use async_trait::async_trait;
use order_admin_core::{Order, OrderId};
use thiserror::Error;

/// Errors that can occur when talking to the orders API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (connection, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unauthorized (missing or invalid API token).
    #[error("Unauthorized: invalid API token")]
    Unauthorized,

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Operations the order list needs from the remote service.
#[async_trait]
pub trait OrdersApi: Send + Sync {
    /// Fetch all orders.
    async fn get_orders(&self) -> Result<Vec<Order>, ApiError>;

    /// Delete a single order.
    async fn delete_order(&self, id: &OrderId) -> Result<(), ApiError>;
}
