//! Numerology: digit roots derived from a name and a birth date.
//!
//! Every reduction maps onto `1..=9`: a remainder of zero modulo nine is
//! reported as 9, never 0. Interpretation text relies on that range.

use serde::Serialize;
use tracing::debug;

use super::random::RandomSource;
use crate::{GENERAL_MAX, LUCKY_COUNT};

/// The three core numbers, each in `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyProfile {
    pub life_path: u32,
    pub expression: u32,
    pub personality: u32,
}

/// Reduce `value` modulo nine, reporting zero as nine.
fn reduce(value: u32) -> u32 {
    match value % 9 {
        0 => 9,
        rest => rest,
    }
}

/// Sum of the per-letter digit roots of `name`.
///
/// Only the Latin letters `a..=z` (after case folding) carry a value; other
/// characters, including Turkish letters such as `ş` or `ı`, add nothing.
fn name_value(name: &str) -> u32 {
    name.to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .map(|c| {
            let ordinal = c as u32 - 'a' as u32 + 1;
            (ordinal - 1) % 9 + 1
        })
        .sum()
}

/// Sum of every decimal digit in `birth_date`; separators and any other
/// characters are ignored.
fn date_sum(birth_date: &str) -> u32 {
    regex!(r"[^0-9]+").replace_all(birth_date, "").bytes().map(|b| u32::from(b - b'0')).sum()
}

/// Compute life-path, expression and personality numbers.
///
/// ```
/// let profile = kismet::compute_numerology("", "2000-01-01");
/// assert_eq!(profile.expression, 9);
/// assert_eq!(profile.life_path, 4);
/// ```
pub fn compute_numerology(name: &str, birth_date: &str) -> NumerologyProfile {
    let life_path = reduce(date_sum(birth_date));
    let expression = reduce(name_value(name));
    let personality = reduce(life_path + expression);

    debug!(target: "kismet", life_path, expression, personality, "numerology profile");
    NumerologyProfile { life_path, expression, personality }
}

/// Draw the numerology lucky numbers for `life_path`.
///
/// Slot `i` (counting accepted values only) proposes
/// `(life_path * (i + 1) + r) mod 90 + 1` with `r` drawn from `0..=9`;
/// proposals already taken are discarded and the slot is retried.
pub fn numerology_numbers<R>(life_path: u32, rng: &mut R) -> Vec<u32>
where
    R: RandomSource + ?Sized,
{
    let mut lucky: Vec<u32> = Vec::with_capacity(LUCKY_COUNT);
    while lucky.len() < LUCKY_COUNT {
        let slot = lucky.len() as u32 + 1;
        let value = (life_path * slot + rng.next_int(10)) % GENERAL_MAX + 1;
        if !lucky.contains(&value) {
            lucky.push(value);
        }
    }
    lucky.sort_unstable();
    lucky
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{RngSource, ScriptedSource};

    #[test]
    fn empty_name_has_expression_nine() {
        let profile = compute_numerology("", "2000-01-01");
        assert_eq!(profile, NumerologyProfile { life_path: 4, expression: 9, personality: 4 });
    }

    #[test]
    fn letters_reduce_before_summing() {
        // a=1 z=26->8 i=9 -> 18 -> 9
        assert_eq!(name_value("azi"), 18);
        assert_eq!(compute_numerology("AZI", "").expression, 9);
        // s=19->1 e=5 l=12->3 i=9 n=14->5 -> 23 -> 5
        assert_eq!(compute_numerology("Selin", "1990-07-15").expression, 5);
    }

    #[test]
    fn non_latin_letters_and_symbols_carry_no_value() {
        assert_eq!(name_value("ışç ğ-ü"), 0);
        assert_eq!(name_value("Ayşe"), name_value("aye"));
    }

    #[test]
    fn birth_date_digits_only() {
        // 1+9+9+0+0+7+1+5 = 32 -> 5
        assert_eq!(compute_numerology("x", "1990-07-15").life_path, 5);
        assert_eq!(compute_numerology("x", "15.07.1990").life_path, 5);
        assert_eq!(compute_numerology("x", "1990/07/15").life_path, 5);
        assert_eq!(compute_numerology("x", "").life_path, 9);
        assert_eq!(compute_numerology("x", "no digits").life_path, 9);
    }

    #[test]
    fn personality_reduces_the_sum() {
        // life path 5 + expression 5 = 10 -> 1
        let profile = compute_numerology("Selin", "1990-07-15");
        assert_eq!(profile.personality, 1);
        // 9 + 9 = 18 -> 9
        assert_eq!(compute_numerology("", "9").personality, 9);
    }

    #[test]
    fn lucky_numbers_follow_the_life_path() {
        // r = 0 everywhere: life_path * slot + 1
        let mut rng = ScriptedSource::new([0]);
        assert_eq!(numerology_numbers(5, &mut rng), vec![6, 11, 16, 21, 26, 31]);
    }

    #[test]
    fn lucky_number_collisions_retry_the_same_slot() {
        // life path 1: slot 1 -> 1 + 1 + 1 = 3; slot 2 -> 2 + 0 + 1 = 3 (taken), then 2 + 2 + 1 = 5.
        let mut rng = ScriptedSource::new([1, 0, 2, 9, 9, 9, 9]);
        let numbers = numerology_numbers(1, &mut rng);
        assert_eq!(numbers, vec![3, 5, 13, 14, 15, 16]);
        assert_eq!(rng.draws(), 7);
    }

    #[test]
    fn lucky_numbers_are_always_valid() {
        for life_path in 1..=9 {
            for seed in 0..50 {
                let mut rng = RngSource::seeded(seed);
                let numbers = numerology_numbers(life_path, &mut rng);
                assert_eq!(numbers.len(), LUCKY_COUNT);
                assert!(numbers.windows(2).all(|w| w[0] < w[1]));
                assert!(numbers.iter().all(|&n| (1..=GENERAL_MAX).contains(&n)));
            }
        }
    }
}
