//! Reusable UI component definitions.

pub mod data_table;
