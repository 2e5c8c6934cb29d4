//! Stateful generator handle
//!
//! Bundles the seed, the number of draws taken and the live state so that
//! callers can checkpoint as `(seed, count)` and rebuild later. The free
//! functions in this module's parent do the actual work.

use super::config::RngConfig;
use super::range::{range_float_scaled, range_int, range_int_exact, InvalidRangeError};
use super::restore::restore;
use super::state::{generate_state, next, State};
use crate::checkpoint::{validate_checkpoint, CheckpointError, RngCheckpoint};
use crate::models::{RngEvent, RngEventLog};

/// Deterministic generator with step counting
///
/// # Example
/// ```
/// use replay_rng_core::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let value = rng.next();
/// let roll = rng.range_int(1, 6, true).unwrap(); // [1, 6]
///
/// assert_eq!(value, 2101738651);
/// assert_eq!(rng.count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RngManager {
    config: RngConfig,
    count: u32,
    state: State,
    events: RngEventLog,
}

impl RngManager {
    /// Create a new generator with given seed and default config
    pub fn new(seed: i32) -> Self {
        Self::with_config(RngConfig::new(seed))
    }

    /// Create a new generator from a full config
    pub fn with_config(config: RngConfig) -> Self {
        let mut manager = Self {
            state: generate_state(config.seed),
            count: 0,
            events: RngEventLog::new(),
            config,
        };
        manager.record(RngEvent::Seeded {
            step: 0,
            seed: manager.config.seed,
        });
        manager
    }

    /// Rebuild a generator from a checkpoint taken with the same config
    ///
    /// # Errors
    /// [`CheckpointError`] if the config or the restored state does not
    /// match what the checkpoint recorded.
    pub fn from_checkpoint(
        checkpoint: &RngCheckpoint,
        config: RngConfig,
    ) -> Result<Self, CheckpointError> {
        let state = validate_checkpoint(checkpoint, &config)?;

        let mut manager = Self {
            state,
            count: checkpoint.step_count,
            events: RngEventLog::new(),
            config,
        };
        manager.record(RngEvent::Restored {
            from_step: 0,
            step: checkpoint.step_count,
        });
        Ok(manager)
    }

    pub fn seed(&self) -> i32 {
        self.config.seed
    }

    /// Number of raw draws taken since seeding
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn config(&self) -> &RngConfig {
        &self.config
    }

    /// Events recorded so far (empty unless `record_events` is set)
    pub fn events(&self) -> &RngEventLog {
        &self.events
    }

    /// Draw the next raw value in `[0, i32::MAX]`
    pub fn next(&mut self) -> i32 {
        let value = next(&mut self.state);
        self.advanced(value);
        value
    }

    /// Random `i32` in `[min, max)` or `[min, max]`
    ///
    /// # Errors
    /// See [`range_int`](super::range_int).
    pub fn range_int(
        &mut self,
        min: i32,
        max: i32,
        max_inclusive: bool,
    ) -> Result<i32, InvalidRangeError> {
        self.track(|state| range_int(min, max, state, max_inclusive))
    }

    /// Random `i32` in `[min, max]` using integer arithmetic only
    ///
    /// # Errors
    /// See [`range_int_exact`](super::range_int_exact).
    pub fn range_int_exact(&mut self, min: i32, max: i32) -> Result<i32, InvalidRangeError> {
        self.track(|state| range_int_exact(min, max, state))
    }

    /// Random `f32` between `min` and `max`, scaled by the configured divisor
    ///
    /// # Errors
    /// See [`range_float_scaled`](super::range_float_scaled).
    pub fn range_float(
        &mut self,
        min: f32,
        max: f32,
        max_inclusive: bool,
    ) -> Result<f32, InvalidRangeError> {
        let divisor = self.config.float_divisor;
        self.track(|state| range_float_scaled(min, max, state, max_inclusive, divisor))
    }

    /// Value the next [`next`](Self::next) call would return, without
    /// advancing
    pub fn peek(&self) -> i32 {
        let mut copy = self.state.clone();
        next(&mut copy)
    }

    /// Value the next [`range_int`](Self::range_int) call would return,
    /// without advancing
    pub fn peek_range_int(
        &self,
        min: i32,
        max: i32,
        max_inclusive: bool,
    ) -> Result<i32, InvalidRangeError> {
        let mut copy = self.state.clone();
        range_int(min, max, &mut copy, max_inclusive)
    }

    /// Value the next [`range_float`](Self::range_float) call would return,
    /// without advancing
    pub fn peek_range_float(
        &self,
        min: f32,
        max: f32,
        max_inclusive: bool,
    ) -> Result<f32, InvalidRangeError> {
        let mut copy = self.state.clone();
        range_float_scaled(min, max, &mut copy, max_inclusive, self.config.float_divisor)
    }

    /// Split off an independent generator at the current position
    ///
    /// The fork starts with an empty event log; draws on either side never
    /// affect the other.
    pub fn fork(&mut self) -> Self {
        self.record(RngEvent::Forked { step: self.count });

        Self {
            config: self.config.clone(),
            count: self.count,
            state: self.state.clone(),
            events: RngEventLog::new(),
        }
    }

    /// Move to the position after exactly `count` draws from the seed
    ///
    /// `count` may be behind or ahead of the current position.
    pub fn restore(&mut self, count: u32) {
        let from_step = self.count;

        self.state = restore(count, self.config.seed);
        self.count = count;

        self.record(RngEvent::Restored {
            from_step,
            step: count,
        });
    }

    /// Capture `(seed, count)` plus integrity digests
    ///
    /// # Errors
    /// [`CheckpointError::Serialization`] if the config cannot be hashed.
    pub fn checkpoint(&self) -> Result<RngCheckpoint, CheckpointError> {
        RngCheckpoint::capture(self.count, &self.state, &self.config)
    }

    /// Run a range mapper and count the draw if it consumed one
    fn track<T>(
        &mut self,
        map: impl FnOnce(&mut State) -> Result<T, InvalidRangeError>,
    ) -> Result<T, InvalidRangeError> {
        let cursor = self.state.cursor();
        let result = map(&mut self.state)?;

        // Every draw moves the cursor, zero-width ranges leave it alone
        if self.state.cursor() != cursor {
            let value = self.state.slots()[self.state.cursor()];
            self.advanced(value);
        }

        Ok(result)
    }

    fn advanced(&mut self, value: i32) {
        self.count += 1;
        self.record(RngEvent::Draw {
            step: self.count,
            value,
        });
    }

    fn record(&mut self, event: RngEvent) {
        if self.config.record_events {
            self.events.log(event);
        }
    }
}
