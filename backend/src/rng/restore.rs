//! Rebuild a state from `(seed, count)`
//!
//! Simulations persist only the seed and the number of draws taken, then
//! replay the draws when they need the full vector again (rollback, replay,
//! server validation). Reconstruction is sequential and O(count).

use super::state::{generate_state, next, State};

/// State reached after seeding with `seed` and drawing `count` times
///
/// `count` may point before or after any state the caller currently holds.
///
/// # Example
/// ```
/// use replay_rng_core::rng::{generate_state, next, restore};
///
/// let mut live = generate_state(12345);
/// for _ in 0..10 {
///     next(&mut live);
/// }
///
/// assert_eq!(restore(10, 12345), live);
/// ```
pub fn restore(count: u32, seed: i32) -> State {
    let mut state = generate_state(seed);

    for _ in 0..count {
        next(&mut state);
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_zero_is_fresh_state() {
        assert_eq!(restore(0, 12345), generate_state(12345));
    }

    #[test]
    fn test_restore_then_next_continues_sequence() {
        let mut state = restore(3, 12345);
        assert_eq!(next(&mut state), 1218633954);
        assert_eq!(next(&mut state), 853764120);
    }
}
