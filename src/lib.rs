//! # school-console
//!
//! Leptos + WASM core for the school administration console: the generic
//! data grid every listing screen renders, and the convention-based REST
//! resource client every screen fetches through.
//!
//! Page shells and entity forms live with the host application; they compose
//! a [`net::api::SchoolApi`] instance with the
//! [`components::generic_table::GenericTable`] grid and own their local
//! loading/error/selection state. This crate deliberately ships no routing,
//! theming, or per-entity UI.

pub mod components;
pub mod net;
pub mod state;
