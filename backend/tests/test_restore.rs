//! Restore Tests - rebuild state from (seed, count)
//!
//! Critical invariant tested:
//! - restore(n, s) == generate_state(s) followed by n sequential next calls

use replay_rng_core::{generate_state, next, restore};

const SEEDS: [i32; 6] = [0, 1, -1, i32::MIN, i32::MAX, 12345];

/// Counts around the 55-slot wrap plus a few long runs
const COUNTS: [u32; 14] = [0, 1, 2, 33, 34, 54, 55, 56, 57, 110, 111, 1000, 9999, 10000];

#[test]
fn test_restore_matches_sequential_replay() {
    for seed in SEEDS {
        let mut live = generate_state(seed);
        let mut taken = 0u32;

        for count in COUNTS {
            while taken < count {
                next(&mut live);
                taken += 1;
            }

            assert_eq!(
                restore(count, seed),
                live,
                "restore diverged for seed {} at count {}",
                seed,
                count
            );
        }
    }
}

#[test]
fn test_restore_every_count_up_to_500() {
    let mut live = generate_state(12345);

    for count in 0..=500 {
        assert_eq!(restore(count, 12345), live, "count {}", count);
        next(&mut live);
    }
}

#[test]
fn test_restore_into_past_and_future() {
    let mut live = generate_state(777);
    for _ in 0..100 {
        next(&mut live);
    }

    let past = restore(40, 777);
    let future = restore(160, 777);

    let mut from_past = past.clone();
    for _ in 40..100 {
        next(&mut from_past);
    }
    assert_eq!(from_past, live);

    for _ in 100..160 {
        next(&mut live);
    }
    assert_eq!(future, live);
}

#[test]
fn test_restored_state_continues_golden_sequence() {
    let mut state = restore(2, 12345);

    assert_eq!(next(&mut state), 183377504);
    assert_eq!(next(&mut state), 1218633954);
    assert_eq!(next(&mut state), 853764120);
}
