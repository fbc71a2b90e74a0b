//! Orders management route handlers.
//!
//! This module contains handlers for the order listing and order deletion.

mod delete;
mod list;
pub mod types;

// Re-export types needed by templates and router
pub use types::{
    ColumnHeaderView, DeleteDialogView, ListParams, OrderRowView, OrdersQuery, PaginationView,
};

pub use delete::delete;
pub use list::{OrdersIndexTemplate, index};
