//! Service dispatch.
//!
//! Each request variant routes to exactly one analysis function. There are no
//! intermediate states and no failure path: every function returns a fully
//! populated result.

use std::iter;

use tracing::debug;

use super::complete::complete;
use super::compose::{Composition, compose_interpretation};
use super::extract::extract_symbols;
use super::mapper::symbols_to_numbers;
use super::numerology::{compute_numerology, numerology_numbers};
use super::random::RandomSource;
use super::trigger::TriggerInfo;
use crate::api::{
    AnalysisRequest, AnalysisResult, CoffeeAnalysis, DefaultAnalysis, DreamAnalysis, LotteryAnalysis,
    NumerologyAnalysis, TarotAnalysis,
};
use crate::rules::games::game_spec;
use crate::rules::{tarot, templates};
use crate::{GENERAL_MAX, JOKER_MAX, LUCKY_COUNT, MAX_SYMBOLS};

/// Base of the dream energy level; the final level is `75..=94`.
const ENERGY_BASE: u32 = 75;
const ENERGY_SPREAD: u32 = 20;

pub(crate) fn dispatch<R>(request: &AnalysisRequest, rng: &mut R) -> AnalysisResult
where
    R: RandomSource + ?Sized,
{
    debug!(target: "kismet", service = %request.service(), "dispatch");
    match request {
        AnalysisRequest::Dream { text } => AnalysisResult::Dream(analyze_dream(text, rng)),
        AnalysisRequest::Numerology { name, birth_date } => {
            AnalysisResult::Numerology(analyze_numerology(name, birth_date, rng))
        }
        AnalysisRequest::Coffee { symbols } => AnalysisResult::Coffee(analyze_coffee(symbols, rng)),
        AnalysisRequest::Tarot => AnalysisResult::Tarot(analyze_tarot()),
        AnalysisRequest::Lottery { game_type, .. } => AnalysisResult::Lottery(analyze_lottery(game_type, rng)),
    }
}

/// Draw order: numbers, joker, energy level.
fn analyze_dream<R>(text: &str, rng: &mut R) -> DreamAnalysis
where
    R: RandomSource + ?Sized,
{
    let symbols = extract_symbols(text);
    let numbers = symbols_to_numbers(&symbols, rng);
    let joker = rng.between(1, JOKER_MAX);
    let energy_level = ENERGY_BASE + rng.next_int(ENERGY_SPREAD);

    let motifs = TriggerInfo::scan(text).motifs;
    let interpretation = compose_interpretation(&Composition::Dream { symbols: &symbols, motifs });

    DreamAnalysis {
        interpretation,
        numbers,
        joker,
        symbols: symbols.into_iter().map(str::to_string).collect(),
        energy_level,
    }
}

fn analyze_numerology<R>(name: &str, birth_date: &str, rng: &mut R) -> NumerologyAnalysis
where
    R: RandomSource + ?Sized,
{
    let profile = compute_numerology(name, birth_date);
    let lucky_numbers = numerology_numbers(profile.life_path, rng);

    NumerologyAnalysis {
        life_path: profile.life_path,
        expression: profile.expression,
        personality: profile.personality,
        lucky_numbers,
        interpretation: compose_interpretation(&Composition::Numerology(&profile)),
    }
}

fn analyze_coffee<R>(symbols: &[String], rng: &mut R) -> CoffeeAnalysis
where
    R: RandomSource + ?Sized,
{
    let symbols: Vec<String> = symbols.iter().take(MAX_SYMBOLS).cloned().collect();
    let interpretation = compose_interpretation(&Composition::Coffee { symbols: &symbols });
    let lucky_numbers = complete(iter::empty(), LUCKY_COUNT, GENERAL_MAX, rng);

    CoffeeAnalysis { symbols, interpretation, lucky_numbers, time_frame: templates::COFFEE_TIME_FRAME.to_string() }
}

fn analyze_tarot() -> TarotAnalysis {
    TarotAnalysis {
        cards: tarot::SPREAD.to_vec(),
        interpretation: compose_interpretation(&Composition::Tarot),
        guidance: templates::TAROT_GUIDANCE.to_string(),
    }
}

/// Draw order: numbers, then the joker for games that have one.
fn analyze_lottery<R>(game_type: &str, rng: &mut R) -> LotteryAnalysis
where
    R: RandomSource + ?Sized,
{
    let game = game_spec(game_type);
    let numbers = complete(iter::empty(), game.count, game.max, rng);
    let joker = game.joker_max.map(|max| rng.between(1, max));

    LotteryAnalysis {
        numbers,
        joker,
        interpretation: compose_interpretation(&Composition::Lottery(game)),
        game_type: game_type.to_string(),
    }
}

/// The answer for requests that cannot be routed: six numbers from the
/// general range and a joker, drawn in that order.
pub(crate) fn default_result<R>(rng: &mut R) -> AnalysisResult
where
    R: RandomSource + ?Sized,
{
    let numbers = complete(iter::empty(), LUCKY_COUNT, GENERAL_MAX, rng);
    let joker = rng.between(1, JOKER_MAX);

    AnalysisResult::Default(DefaultAnalysis {
        interpretation: compose_interpretation(&Composition::Default),
        numbers,
        joker,
    })
}
