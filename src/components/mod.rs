//! Reusable UI components.

pub mod generic_table;
