//! Checkpoint - Save/Load Generator Position
//!
//! A checkpoint stores the two scalars needed to rebuild a generator,
//! `(seed, step_count)`, plus two digests that catch mismatches on load.
//!
//! # Critical Invariants
//!
//! - **Determinism**: Same seed + step count rebuilds a bit-identical state
//! - **State Matching**: Rebuilt state must hash to the recorded digest
//! - **Config Matching**: State can only be loaded with matching config

use crate::rng::{restore, RngConfig, State};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors raised while saving or loading checkpoints
#[derive(Debug, Error, PartialEq)]
pub enum CheckpointError {
    #[error("Checkpoint serialization failed: {0}")]
    Serialization(String),

    #[error("Config mismatch: checkpoint was taken with config {expected}, got {actual}")]
    ConfigMismatch { expected: String, actual: String },

    #[error("State digest mismatch at step {step_count}: expected {expected}, got {actual}")]
    DigestMismatch {
        step_count: u32,
        expected: String,
        actual: String,
    },
}

// ============================================================================
// Snapshot Structure
// ============================================================================

/// Generator position snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngCheckpoint {
    /// Seed the sequence started from
    pub seed: i32,

    /// Raw draws taken since seeding
    pub step_count: u32,

    /// SHA256 of the state at `step_count`
    pub state_digest: String,

    /// SHA256 of the config in effect
    pub config_hash: String,
}

impl RngCheckpoint {
    /// Snapshot the position `step_count` draws after `config.seed`
    pub fn capture(
        step_count: u32,
        state: &State,
        config: &RngConfig,
    ) -> Result<Self, CheckpointError> {
        Ok(Self {
            seed: config.seed,
            step_count,
            state_digest: compute_state_digest(state),
            config_hash: compute_config_hash(config)?,
        })
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::Serialization(e.to_string()))
    }
}

// ============================================================================
// Hashing
// ============================================================================

/// SHA256 of the 56 slots as little-endian `i32`s
///
/// Two peers holding the same generator position produce the same digest,
/// so positions can be compared without shipping the vector.
pub fn compute_state_digest(state: &State) -> String {
    let mut hasher = Sha256::new();
    for slot in state.slots() {
        hasher.update(slot.to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}

/// Compute deterministic SHA256 hash of config
///
/// Uses canonical JSON serialization with sorted keys so the hash does not
/// depend on field order.
pub fn compute_config_hash<T: Serialize>(config: &T) -> Result<String, CheckpointError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    let value = serde_json::to_value(config)
        .map_err(|e| CheckpointError::Serialization(format!("Config serialization failed: {}", e)))?;

    // Recursively sort all object keys for canonical representation
    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let json = serde_json::to_string(&canonicalize(value))
        .map_err(|e| CheckpointError::Serialization(format!("Config serialization failed: {}", e)))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());

    Ok(format!("{:x}", hasher.finalize()))
}

// ============================================================================
// Validation
// ============================================================================

/// Rebuild the state a checkpoint points at and verify it
///
/// Checks, in order:
/// - Config hash matches `config`
/// - Seed matches `config.seed`
/// - Replayed state hashes to the recorded digest
pub fn validate_checkpoint(
    checkpoint: &RngCheckpoint,
    config: &RngConfig,
) -> Result<State, CheckpointError> {
    let config_hash = compute_config_hash(config)?;
    if config_hash != checkpoint.config_hash || checkpoint.seed != config.seed {
        return Err(CheckpointError::ConfigMismatch {
            expected: checkpoint.config_hash.clone(),
            actual: config_hash,
        });
    }

    let state = restore(checkpoint.step_count, checkpoint.seed);

    let digest = compute_state_digest(&state);
    if digest != checkpoint.state_digest {
        return Err(CheckpointError::DigestMismatch {
            step_count: checkpoint.step_count,
            expected: checkpoint.state_digest.clone(),
            actual: digest,
        });
    }

    Ok(state)
}
