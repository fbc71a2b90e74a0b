//! Order Admin Core - Shared types library.
//!
//! This crate provides the types shared by the order admin components:
//! - `admin` - Server-rendered order administration panel
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. It describes
//! the wire shape of the remote orders API so that clients and views agree on it.
//!
//! # Modules
//!
//! - [`types`] - Type-safe order identifiers, amounts, and the order record

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
