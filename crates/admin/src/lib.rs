//! Order Admin library.
//!
//! This crate provides the admin panel as a library, allowing it to be
//! tested and reused.
//!
//! # Modules
//!
//! - [`api`] - Orders service client behind the [`api::OrdersApi`] trait
//! - [`orders`] - Order list state, delete confirmation flow, grid behavior
//! - [`routes`] - Server-rendered pages
//!
//! # Security
//!
//! The panel can delete orders on the remote service. Deploy it behind a
//! private network or an authenticating proxy; it performs no login itself.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod filters;
pub mod orders;
pub mod routes;
pub mod state;

use axum::Router;

/// Build the application router with state attached.
///
/// Static files, tracing, and Sentry layers are added by the binary.
pub fn app(state: state::AppState) -> Router {
    routes::routes().with_state(state)
}
