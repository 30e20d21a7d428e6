//! Weighted random attack selection with repeat avoidance.
//!
//! Both selectors are pure functions of their inputs plus the random
//! stream. Repeat avoidance is a bounded retry: a roll equal to the
//! previous choice is re-rolled up to [`REPEAT_RETRY_CAP`] times, after
//! which the repeat is accepted. With a heavily dominant weight a repeat
//! can therefore still occur — that fall-through is expected behavior, not
//! an error.

use crate::env::RngSource;

/// Maximum re-rolls before a repeated choice is accepted.
pub const REPEAT_RETRY_CAP: usize = 10;

/// Uniform random pick among `candidates`, avoiding `last` when possible.
///
/// Returns `None` only for an empty candidate list. With a single
/// candidate the repeat check is skipped entirely.
pub fn select_next<T>(candidates: &[T], last: Option<T>, rng: &mut dyn RngSource) -> Option<T>
where
    T: Copy + PartialEq,
{
    if candidates.is_empty() {
        return None;
    }
    let mut pick = candidates[rng.pick_index(candidates.len())];
    if candidates.len() > 1 {
        for _ in 0..REPEAT_RETRY_CAP {
            if Some(pick) != last {
                break;
            }
            pick = candidates[rng.pick_index(candidates.len())];
        }
    }
    Some(pick)
}

/// Cumulative-weight roulette pick among `candidates`, avoiding `last`
/// when possible.
///
/// Draws a uniform value in [0, total weight) and walks the candidates
/// accumulating weight, returning the first whose cumulative weight meets
/// or exceeds the draw. Candidates with non-positive weight are never the
/// outcome of a fresh draw unless all weights are non-positive.
pub fn select_weighted<T>(
    candidates: &[(T, f32)],
    last: Option<T>,
    rng: &mut dyn RngSource,
) -> Option<T>
where
    T: Copy + PartialEq,
{
    if candidates.is_empty() {
        return None;
    }
    let mut pick = roulette(candidates, rng);
    if candidates.len() > 1 {
        for _ in 0..REPEAT_RETRY_CAP {
            if Some(pick) != last {
                break;
            }
            pick = roulette(candidates, rng);
        }
    }
    Some(pick)
}

fn roulette<T: Copy>(candidates: &[(T, f32)], rng: &mut dyn RngSource) -> T {
    let total: f32 = candidates.iter().map(|(_, w)| w.max(0.0)).sum();
    if total <= 0.0 {
        // Degenerate weights: fall back to a uniform pick
        return candidates[rng.pick_index(candidates.len())].0;
    }
    let draw = rng.range_f32(0.0, total);
    let mut cumulative = 0.0;
    for (candidate, weight) in candidates {
        cumulative += weight.max(0.0);
        if cumulative >= draw && *weight > 0.0 {
            return *candidate;
        }
    }
    // Float accumulation can land the draw a hair past the final bucket
    candidates[candidates.len() - 1].0
}
