//! REST API layer.
//!
//! DESIGN
//! ======
//! The layer is split along its seams: `transport` talks to the wire,
//! `session` persists the bearer token, `client` owns the shared request
//! decoration and response interception, and `resource` generates the
//! uniform CRUD set for a base path. `api` wires those into the named
//! services the backend exposes. Everything except the browser transport
//! and the localStorage session compiles and tests natively.

pub mod api;
pub mod client;
pub mod envelope;
pub mod error;
pub mod resource;
pub mod session;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
