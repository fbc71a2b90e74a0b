//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Health check
//! GET  /                           - Redirects to the order listing
//!
//! # Orders (backed by the remote orders API)
//! GET  /orders                     - Order listing (?page=&sort=&dir=&q=&confirm_delete=)
//! POST /orders/{id}/delete         - Delete an order, then back to the listing
//! ```

pub mod orders;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Build the application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/", get(home))
        .route("/orders", get(orders::index))
        .route("/orders/{id}/delete", post(orders::delete))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the orders API.
async fn health() -> &'static str {
    "ok"
}

async fn home() -> Redirect {
    Redirect::to("/orders")
}
