//! Generator configuration

use serde::{Deserialize, Serialize};

/// Divisor applied by the float range mapper
///
/// Recorded replays were produced with `f32::MAX`, which squeezes every
/// draw to within a few ulps of `min`. `I32Max` matches the integer mapper
/// and spreads values over the whole range, at the cost of replay
/// compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatDivisor {
    #[default]
    F32Max,
    I32Max,
}

impl FloatDivisor {
    pub fn value(self) -> f32 {
        match self {
            FloatDivisor::F32Max => f32::MAX,
            FloatDivisor::I32Max => i32::MAX as f32,
        }
    }
}

/// Configuration for an [`RngManager`](super::RngManager)
///
/// # Example
/// ```
/// use replay_rng_core::rng::{FloatDivisor, RngConfig};
///
/// let config: RngConfig = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
/// assert_eq!(config.seed, 7);
/// assert_eq!(config.float_divisor, FloatDivisor::F32Max);
/// assert!(!config.record_events);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RngConfig {
    /// Seed the sequence starts from
    #[serde(default)]
    pub seed: i32,

    /// Divisor for float ranges
    #[serde(default)]
    pub float_divisor: FloatDivisor,

    /// Record every seed/draw/fork/restore in the manager's event log
    #[serde(default)]
    pub record_events: bool,
}

impl RngConfig {
    pub fn new(seed: i32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}
