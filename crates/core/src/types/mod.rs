//! Core types for Order Admin.
//!
//! This module provides type-safe wrappers for the order domain.

pub mod amount;
pub mod id;
pub mod order;

pub use amount::Amount;
pub use id::*;
pub use order::{Order, OrderUser};
