//! Order list view logic.
//!
//! - [`list`] - the component state: last fetched snapshot plus the delete
//!   confirmation flow
//! - [`grid`] - sorting, quick search and paging over a snapshot
//! - [`controller`] - drives the fetch / delete / re-fetch cycle against an
//!   [`OrdersApi`](crate::api::OrdersApi)

pub mod controller;
pub mod grid;
pub mod list;

pub use controller::OrderListController;
pub use grid::{GridPage, GridQuery, PAGE_SIZE, SortDirection, SortKey, SortModel};
pub use list::{DeleteFlow, OrderList, OrderListError};
