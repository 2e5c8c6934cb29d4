//! Deterministic random number generation
//!
//! Knuth's subtractive generator with an explicit 56-slot state.
//! CRITICAL: Same seed + same calls MUST produce the same values on every
//! platform. Replays, rollback and server validation all depend on it.

mod config;
mod manager;
mod range;
mod restore;
mod state;

pub use config::{FloatDivisor, RngConfig};
pub use manager::RngManager;
pub use range::{range_float, range_float_scaled, range_int, range_int_exact, InvalidRangeError};
pub use restore::restore;
pub use state::{copy_state, generate_state, next, InvalidStateError, State, STATE_LEN};
