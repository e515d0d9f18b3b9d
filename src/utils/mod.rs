//! # Utilities Module
//!
//! Convergence arithmetic for the graph builder and graph traversal helpers
//! used when validating layouts.

pub mod math;
pub mod traversal;

pub use math::*;
pub use traversal::*;
