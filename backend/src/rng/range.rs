//! Range mapping
//!
//! Maps a single raw draw onto a bounded integer or float range. The
//! arithmetic is part of the replay contract:
//!
//! - [`range_int`] scales in `f32` (never `f64`) and divides by `i32::MAX`
//! - [`range_float`] divides by `f32::MAX`, the divisor recorded replays
//!   were produced with; [`range_float_scaled`] makes the divisor explicit
//! - [`range_int_exact`] uses integer arithmetic only
//!
//! A zero-width exclusive range returns `min` without drawing. A zero-width
//! inclusive range is rejected.

use super::config::FloatDivisor;
use super::state::{next, State};
use thiserror::Error;

/// Errors raised for unusable range bounds
#[derive(Debug, Error, PartialEq)]
pub enum InvalidRangeError {
    #[error("The min range value must be less than the max range value: min {min}, max {max}")]
    Int { min: i32, max: i32 },

    #[error("The min range value must be less than the max range value: min {min}, max {max}")]
    Float { min: f32, max: f32 },
}

/// Draw once, keeping an inclusive result from overshooting `max`
fn draw(state: &mut State, max_inclusive: bool) -> i32 {
    let value = next(state);

    if max_inclusive && value == i32::MAX {
        value - 1
    } else {
        value
    }
}

/// Random `i32` in `[min, max)` or `[min, max]`
///
/// # Errors
/// [`InvalidRangeError::Int`] if `min > max`, or if `min == max` and
/// `max_inclusive` is set.
///
/// # Example
/// ```
/// use replay_rng_core::rng::{generate_state, range_int};
///
/// let mut state = generate_state(12345);
/// let roll = range_int(1, 6, &mut state, true).unwrap();
/// assert_eq!(roll, 6);
/// ```
pub fn range_int(
    min: i32,
    max: i32,
    state: &mut State,
    max_inclusive: bool,
) -> Result<i32, InvalidRangeError> {
    if min > max || (max_inclusive && min == max) {
        return Err(InvalidRangeError::Int { min, max });
    }

    if min == max {
        return Ok(min);
    }

    let range = (i64::from(max) - i64::from(min)) as f32;
    let value = draw(state, max_inclusive) as f32;
    let scaled = range * value / i32::MAX as f32 + min as f32;

    let result = if max_inclusive {
        scaled.round_ties_even()
    } else {
        scaled.floor()
    };

    Ok(result as i32)
}

/// Random `i32` in `[min, max]` using integer arithmetic only
///
/// `max` is reached only when the raw draw is exactly `i32::MAX`.
///
/// # Errors
/// [`InvalidRangeError::Int`] if `min > max`.
pub fn range_int_exact(min: i32, max: i32, state: &mut State) -> Result<i32, InvalidRangeError> {
    if min > max {
        return Err(InvalidRangeError::Int { min, max });
    }

    if min == max {
        return Ok(min);
    }

    let range = i64::from(max) - i64::from(min);
    let value = i64::from(next(state));

    Ok((value * range / i64::from(i32::MAX) + i64::from(min)) as i32)
}

/// Random `f32` between `min` and `max` with the legacy `f32::MAX` divisor
///
/// Equivalent to [`range_float_scaled`] with [`FloatDivisor::F32Max`].
pub fn range_float(
    min: f32,
    max: f32,
    state: &mut State,
    max_inclusive: bool,
) -> Result<f32, InvalidRangeError> {
    range_float_scaled(min, max, state, max_inclusive, FloatDivisor::F32Max)
}

/// Random `f32` between `min` and `max`, scaled by `divisor`
///
/// Result is `(max - min) / divisor * draw + min`.
///
/// # Errors
/// [`InvalidRangeError::Float`] if `min > max`, if either bound is NaN, or
/// if `min == max` and `max_inclusive` is set.
pub fn range_float_scaled(
    min: f32,
    max: f32,
    state: &mut State,
    max_inclusive: bool,
    divisor: FloatDivisor,
) -> Result<f32, InvalidRangeError> {
    // Negated so NaN bounds fail as well
    if !(min <= max) || (max_inclusive && min == max) {
        return Err(InvalidRangeError::Float { min, max });
    }

    if min == max {
        return Ok(min);
    }

    let range = max - min;
    let value = draw(state, max_inclusive) as f32;

    Ok((range / divisor.value()) * value + min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::generate_state;

    #[test]
    fn test_inverted_bounds_rejected() {
        let mut state = generate_state(1);
        assert_eq!(
            range_int(10, 5, &mut state, false),
            Err(InvalidRangeError::Int { min: 10, max: 5 })
        );
        assert_eq!(
            range_int_exact(10, 5, &mut state),
            Err(InvalidRangeError::Int { min: 10, max: 5 })
        );
        assert_eq!(
            range_float(2.0, 1.0, &mut state, true),
            Err(InvalidRangeError::Float { min: 2.0, max: 1.0 })
        );
    }

    #[test]
    fn test_nan_bounds_rejected() {
        let mut state = generate_state(1);
        assert!(range_float(f32::NAN, 1.0, &mut state, false).is_err());
        assert!(range_float(0.0, f32::NAN, &mut state, false).is_err());
    }

    #[test]
    fn test_rejected_range_does_not_draw() {
        let mut state = generate_state(5);
        let before = state.clone();

        let _ = range_int(3, 3, &mut state, true);
        let _ = range_float(1.5, 1.5, &mut state, true);

        assert_eq!(state, before);
    }

    #[test]
    fn test_exact_range_zero_width_does_not_draw() {
        let mut state = generate_state(5);
        let before = state.clone();

        assert_eq!(range_int_exact(9, 9, &mut state), Ok(9));
        assert_eq!(state, before);
    }

    #[test]
    fn test_inclusive_rounds_half_to_even() {
        // 2.5 and 3.5 are exact in f32
        assert_eq!(2.5f32.round_ties_even(), 2.0);
        assert_eq!(3.5f32.round_ties_even(), 4.0);
    }

    #[test]
    fn test_legacy_float_divisor_collapses_to_min() {
        let mut state = generate_state(7);
        for _ in 0..3 {
            let value = range_float(1.0, 5.0, &mut state, false).unwrap();
            assert_eq!(value, 1.0);
        }
    }
}
