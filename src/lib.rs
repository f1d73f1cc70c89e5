#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod rules;

pub use api::{
    AnalysisRequest, AnalysisResult, CoffeeAnalysis, DefaultAnalysis, DreamAnalysis, LotteryAnalysis,
    NumerologyAnalysis, Payload, ServiceKind, TarotAnalysis, analyze, analyze_payload, analyze_payload_with,
    analyze_with,
};
pub use engine::{
    Composition, MotifMask, NumerologyProfile, RandomSource, RngSource, ScriptedSource, TriggerInfo, complete,
    compose_interpretation, compute_numerology, extract_symbols, numerology_numbers, symbols_to_numbers,
};
pub use error::PayloadError;
pub use rules::games::{GameSpec, game_spec};
pub use rules::tarot::TarotCard;

// --- Shared limits ------------------------------------------------------------

/// Maximum number of symbols kept from a dream text or a coffee cup.
pub const MAX_SYMBOLS: usize = 5;

/// Size of the main number set for dream, numerology, coffee and the default result.
pub const LUCKY_COUNT: usize = 6;

/// Upper bound (inclusive) of the general number range.
pub const GENERAL_MAX: u32 = 90;

/// Upper bound (inclusive) of the joker drawn for dreams and the default result.
pub const JOKER_MAX: u32 = 10;

// --- Internal types ---------------------------------------------------------

/// One row of the symbol dictionary: a canonical symbol name, the keywords
/// that trigger it, and the candidate numbers it contributes.
///
/// The dictionary and the number table share one row so that iteration order
/// (which decides extraction order) is defined in a single place.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SymbolEntry {
    pub name: &'static str,
    /// Lower-case keywords, matched as plain substrings.
    pub keywords: &'static [&'static str],
    /// 2-3 candidates, each in `1..=GENERAL_MAX`.
    pub numbers: &'static [u32],
}
