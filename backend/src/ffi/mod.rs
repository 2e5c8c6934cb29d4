//! PyO3 bindings
//!
//! Thin wrappers for offline replay tooling. All generator logic stays in
//! the Rust core.

pub mod rng;
