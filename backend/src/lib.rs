//! Replay RNG Core - Rust Engine
//!
//! Deterministic pseudorandom number generation with explicit,
//! reconstructible state for replay, rollback and server validation.
//!
//! # Architecture
//!
//! - **rng**: State vector, stepping, restore, copy and range mapping
//! - **checkpoint**: `(seed, step_count)` snapshots with integrity digests
//! - **models**: Structured event log
//!
//! # Critical Invariants
//!
//! 1. Same seed + same calls → bit-identical values on every platform
//! 2. A `State` always has exactly 56 slots and an in-range cursor
//! 3. No global generator: every sequence is a value owned by its caller

// Module declarations
pub mod checkpoint;
pub mod models;
pub mod rng;

// Re-exports for convenience
pub use checkpoint::{
    compute_config_hash, compute_state_digest, validate_checkpoint, CheckpointError,
    RngCheckpoint,
};
pub use models::{RngEvent, RngEventLog};
pub use rng::{
    copy_state, generate_state, next, range_float, range_float_scaled, range_int,
    range_int_exact, restore, FloatDivisor, InvalidRangeError, InvalidStateError, RngConfig,
    RngManager, State, STATE_LEN,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn replay_rng_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::rng::PyRng>()?;
    Ok(())
}
