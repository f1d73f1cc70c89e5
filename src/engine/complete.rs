//! Candidate completion and normalization.

use tracing::trace;

use super::random::RandomSource;

/// Fill `partial` up to exactly `target` distinct values and return them in
/// ascending order.
///
/// Values from `partial` are taken in iteration order with duplicates
/// collapsed; if there are more than `target` of them only the first `target`
/// survive. Missing slots are drawn uniformly from `1..=max`, rejecting values
/// already present.
///
/// Callers must not ask for more distinct values than the range holds
/// (`target > max`); the draw loop would never finish.
pub fn complete<R>(partial: impl IntoIterator<Item = u32>, target: usize, max: u32, rng: &mut R) -> Vec<u32>
where
    R: RandomSource + ?Sized,
{
    debug_assert!(target <= max as usize, "cannot draw {target} distinct values from 1..={max}");

    let mut chosen: Vec<u32> = Vec::with_capacity(target);
    for value in partial {
        if !chosen.contains(&value) {
            chosen.push(value);
        }
    }
    chosen.truncate(target);

    let seeded = chosen.len();
    while chosen.len() < target {
        let value = rng.between(1, max);
        if !chosen.contains(&value) {
            chosen.push(value);
        }
    }

    trace!(target: "kismet", seeded, drawn = target - seeded, max, "completed candidates");
    chosen.sort_unstable();
    chosen
}
