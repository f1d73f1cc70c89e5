//! Symbol-to-number mapping.

use tracing::debug;

use super::complete::complete;
use super::random::RandomSource;
use crate::rules::symbols::numbers_for;
use crate::{GENERAL_MAX, LUCKY_COUNT};

/// Upper bound of the single candidate synthesized for an unknown symbol.
const UNKNOWN_SYMBOL_MAX: u32 = 45;

/// Turn symbols into exactly [`LUCKY_COUNT`] distinct ascending numbers in
/// `1..=GENERAL_MAX`.
///
/// Each known symbol contributes its table candidates; an unknown one
/// contributes a single draw from `1..=45`. Candidates keep the order they
/// were produced in, so when more than six accumulate the first six win.
/// Short sets are padded with draws from the general range. An empty symbol
/// list is valid and yields six random numbers.
pub fn symbols_to_numbers<S, R>(symbols: &[S], rng: &mut R) -> Vec<u32>
where
    S: AsRef<str>,
    R: RandomSource + ?Sized,
{
    let mut candidates = Vec::new();
    for symbol in symbols {
        match numbers_for(symbol.as_ref()) {
            Some(values) => candidates.extend_from_slice(values),
            None => {
                debug!(target: "kismet", symbol = symbol.as_ref(), "unknown symbol, drawing a candidate");
                candidates.push(rng.between(1, UNKNOWN_SYMBOL_MAX));
            }
        }
    }
    candidates.retain(|&value| value <= GENERAL_MAX);

    complete(candidates, LUCKY_COUNT, GENERAL_MAX, rng)
}
