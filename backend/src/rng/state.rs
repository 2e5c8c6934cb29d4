//! Subtractive (lagged-Fibonacci) generator state
//!
//! Knuth's subtractive generator, seeded the same way as the classic .NET
//! `System.Random` but stepped with its own lag. The whole generator position
//! lives in a 56-slot `i32` vector, so the sequence can be forked, compared
//! and rebuilt from `(seed, count)` alone.
//!
//! # Layout
//!
//! - Slot 0: cursor (index of the last written slot, `0..=55`)
//! - Slots 1..=55: generator values
//!
//! # Determinism
//!
//! All arithmetic is 32-bit two's complement with explicit wrapping and a
//! `+ i32::MAX` fold for negative results. Same seed + same calls → same
//! values on every platform.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of slots in a generator state
pub const STATE_LEN: usize = 56;

/// Index of the cursor slot
const CURSOR: usize = 0;

/// Magic seed constant based on Phi (golden ratio)
const GOLDEN_SEED: i32 = 161_803_398;

/// Stride used to spread the bootstrap sequence over slots 1..=54
const SPREAD: usize = 21;

/// Distance between the two slots combined by a single step
const LAG: usize = SPREAD + 1;

/// Full passes over slots 1..=55 after the bootstrap
const WARM_UP_PASSES: usize = 4;

/// Errors raised when raw slots do not form a usable generator state
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidStateError {
    #[error("The random state has the wrong length: expected {expected}, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("The random state cursor {cursor} is outside 0..=55")]
    CursorOutOfRange { cursor: i32 },

    #[error("The random state was never seeded")]
    Unseeded,
}

/// Generator state vector
///
/// Can only be obtained from [`generate_state`], [`restore`](super::restore),
/// [`copy_state`] or a validated conversion from raw slots, so every `State`
/// in circulation has exactly 56 slots and an in-range cursor.
///
/// # Example
/// ```
/// use replay_rng_core::rng::{generate_state, next};
///
/// let mut state = generate_state(12345);
/// assert_eq!(next(&mut state), 2101738651);
/// assert_eq!(state.cursor(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "Vec<i32>")]
pub struct State {
    slots: [i32; STATE_LEN],
}

impl State {
    /// All 56 slots, cursor first
    pub fn slots(&self) -> &[i32] {
        &self.slots
    }

    /// Index of the most recently written slot
    pub fn cursor(&self) -> usize {
        // Validated on construction, only `next` writes it afterwards
        self.slots[CURSOR] as usize
    }
}

impl AsRef<[i32]> for State {
    fn as_ref(&self) -> &[i32] {
        &self.slots
    }
}

impl TryFrom<&[i32]> for State {
    type Error = InvalidStateError;

    fn try_from(raw: &[i32]) -> Result<Self, Self::Error> {
        let slots = <[i32; STATE_LEN]>::try_from(raw).map_err(|_| {
            InvalidStateError::WrongLength {
                expected: STATE_LEN,
                actual: raw.len(),
            }
        })?;

        let cursor = slots[CURSOR];
        if !(0..STATE_LEN as i32).contains(&cursor) {
            return Err(InvalidStateError::CursorOutOfRange { cursor });
        }

        if slots[1..].iter().all(|&slot| slot == 0) {
            return Err(InvalidStateError::Unseeded);
        }

        Ok(Self { slots })
    }
}

impl TryFrom<Vec<i32>> for State {
    type Error = InvalidStateError;

    fn try_from(raw: Vec<i32>) -> Result<Self, Self::Error> {
        Self::try_from(raw.as_slice())
    }
}

impl From<State> for Vec<i32> {
    fn from(state: State) -> Self {
        state.slots.to_vec()
    }
}

/// Fold a negative intermediate back into `[0, i32::MAX)`
#[inline]
fn fold_negative(value: i32) -> i32 {
    if value < 0 {
        value + i32::MAX
    } else {
        value
    }
}

/// Generate a brand new state from `seed`
///
/// Any `i32` is accepted. `i32::MIN` has no absolute value and is treated as
/// `i32::MAX`, so both seeds produce the same sequence.
///
/// # Example
/// ```
/// use replay_rng_core::rng::generate_state;
///
/// let a = generate_state(42);
/// let b = generate_state(42);
/// assert_eq!(a, b);
/// ```
pub fn generate_state(seed: i32) -> State {
    let subtraction = if seed == i32::MIN {
        i32::MAX
    } else {
        seed.abs()
    };

    let mut value = GOLDEN_SEED - subtraction;
    let mut slots = [0; STATE_LEN];

    slots[STATE_LEN - 1] = value;
    slots[CURSOR] = 0;

    // Slots 1..=55 carry the sequence (Knuth), slot 0 is reused as the cursor
    let mut term = 1;
    for i in 1..STATE_LEN - 1 {
        let index = (SPREAD * i) % (STATE_LEN - 1);

        slots[index] = term;
        term = fold_negative(value.wrapping_sub(term));
        value = slots[index];
    }

    for _ in 0..WARM_UP_PASSES {
        for i in 1..STATE_LEN {
            let back = 1 + (i + 30) % (STATE_LEN - 1);
            slots[i] = fold_negative(slots[i].wrapping_sub(slots[back]));
        }
    }

    State { slots }
}

/// Advance `state` by one draw and return the drawn value
///
/// The result is in `[0, i32::MAX]` for every state produced by
/// [`generate_state`].
pub fn next(state: &mut State) -> i32 {
    let mut index1 = state.cursor() + 1;
    if index1 >= STATE_LEN {
        index1 = 1;
    }

    let mut index2 = index1 + LAG;
    if index2 >= STATE_LEN {
        index2 = 1;
    }

    let value = fold_negative(state.slots[index1].wrapping_sub(state.slots[index2]));

    state.slots[index1] = value;
    state.slots[CURSOR] = index1 as i32;

    value
}

/// Copy raw generator slots into a new, independent state
///
/// Use this to draw speculatively without disturbing the authoritative
/// sequence. Accepts a `State` or any raw `i32` buffer; raw buffers are
/// validated first.
///
/// # Errors
/// [`InvalidStateError`] if the buffer is not a valid 56-slot state.
pub fn copy_state<S>(state: &S) -> Result<State, InvalidStateError>
where
    S: AsRef<[i32]> + ?Sized,
{
    State::try_from(state.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_cursor_is_zero() {
        let state = generate_state(12345);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.slots().len(), STATE_LEN);
    }

    #[test]
    fn test_seed_zero_first_slots() {
        let state = generate_state(0);
        assert_eq!(&state.slots()[1..4], &[1440537475, 765327687, 2146736586]);
        assert_eq!(state.slots()[55], 25386146);
    }

    #[test]
    fn test_min_seed_matches_max_seed() {
        assert_eq!(generate_state(i32::MIN), generate_state(i32::MAX));
    }

    #[test]
    fn test_negative_seed_matches_positive_seed() {
        assert_eq!(generate_state(-1), generate_state(1));
    }

    #[test]
    fn test_cursor_wraps_back_to_one() {
        let mut state = generate_state(7);
        for _ in 0..55 {
            next(&mut state);
        }
        assert_eq!(state.cursor(), 55);

        next(&mut state);
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn test_unseeded_slots_rejected() {
        let zeros = vec![0; STATE_LEN];
        assert_eq!(State::try_from(zeros), Err(InvalidStateError::Unseeded));
    }

    #[test]
    fn test_cursor_out_of_range_rejected() {
        let mut raw: Vec<i32> = generate_state(3).into();
        raw[0] = 56;
        assert_eq!(
            State::try_from(raw.clone()),
            Err(InvalidStateError::CursorOutOfRange { cursor: 56 })
        );

        raw[0] = -1;
        assert_eq!(
            State::try_from(raw),
            Err(InvalidStateError::CursorOutOfRange { cursor: -1 })
        );
    }

    #[test]
    fn test_serde_roundtrip_validates() {
        let state = generate_state(99);
        let json = serde_json::to_string(&state).unwrap();
        let back: State = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);

        let short = serde_json::to_string(&vec![1; 55]).unwrap();
        assert!(serde_json::from_str::<State>(&short).is_err());
    }
}
