//! Headless client-side state.
//!
//! DESIGN
//! ======
//! Logic lives in plain structs so it can be unit tested off the DOM;
//! components wrap them in signals and stay thin.

pub mod table;
