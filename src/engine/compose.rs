//! Interpretation composition.

use super::numerology::NumerologyProfile;
use super::trigger::MotifMask;
use crate::rules::games::GameSpec;
use crate::rules::templates;

/// Coffee readings name at most this many symbols in their text.
const COFFEE_NAMED_SYMBOLS: usize = 3;

/// Everything a template may depend on, keyed by service.
#[derive(Debug, Clone, Copy)]
pub enum Composition<'a> {
    Dream { symbols: &'a [&'a str], motifs: MotifMask },
    Numerology(&'a NumerologyProfile),
    Coffee { symbols: &'a [String] },
    Tarot,
    Lottery(&'a GameSpec),
    Default,
}

/// Produce the interpretation text for `composition`.
///
/// Dream text is a symbol summary (when any symbol was found) followed by
/// the first template whose motif is present, or the generic one.
///
/// ```
/// use kismet::{Composition, MotifMask, compose_interpretation};
///
/// let text = compose_interpretation(&Composition::Dream { symbols: &["yılan"], motifs: MotifMask::SNAKE });
/// assert!(text.starts_with("Rüyanızdaki yılan sembolleri"));
/// assert!(text.contains("Yılan sembolü"));
/// ```
pub fn compose_interpretation(composition: &Composition<'_>) -> String {
    match composition {
        Composition::Dream { symbols, motifs } => {
            let mut text = String::new();
            if !symbols.is_empty() {
                text.push_str(&templates::dream_symbol_prefix(&symbols.join(", ")));
            }
            let body = templates::DREAM_DECISIONS
                .iter()
                .find(|(motif, _)| motifs.contains(*motif))
                .map(|(_, template)| *template)
                .unwrap_or(templates::DREAM_FALLBACK);
            text.push_str(body);
            text
        }
        Composition::Numerology(profile) => templates::numerology(profile.life_path, profile.expression),
        Composition::Coffee { symbols } if symbols.is_empty() => templates::COFFEE_FALLBACK.to_string(),
        Composition::Coffee { symbols } => {
            let named = &symbols[..symbols.len().min(COFFEE_NAMED_SYMBOLS)];
            templates::coffee_with_symbols(&named.join(", "))
        }
        Composition::Tarot => templates::TAROT_INTERPRETATION.to_string(),
        Composition::Lottery(game) => templates::lottery(game.display_name),
        Composition::Default => templates::DEFAULT_INTERPRETATION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::games::game_spec;

    #[test]
    fn first_matching_motif_wins() {
        let all = MotifMask::WATER | MotifMask::MONEY | MotifMask::SNAKE;
        let text = compose_interpretation(&Composition::Dream { symbols: &[], motifs: all });
        assert!(text.starts_with("Su, duygusal"));

        let text = compose_interpretation(&Composition::Dream {
            symbols: &[],
            motifs: MotifMask::MONEY | MotifMask::SNAKE,
        });
        assert!(text.starts_with("Maddi güç"));
    }

    #[test]
    fn dream_without_symbols_or_motifs_is_generic() {
        let text = compose_interpretation(&Composition::Dream { symbols: &[], motifs: MotifMask::empty() });
        assert_eq!(text, templates::DREAM_FALLBACK);
    }

    #[test]
    fn dream_prefix_lists_symbols() {
        let text =
            compose_interpretation(&Composition::Dream { symbols: &["yılan", "elma"], motifs: MotifMask::SNAKE });
        assert!(text.starts_with("Rüyanızdaki yılan, elma sembolleri güçlü kozmik mesajlar taşıyor. Yılan"));
    }

    #[test]
    fn coffee_names_at_most_three_symbols() {
        let symbols: Vec<String> = ["kuş", "yol", "yüzük", "kalp"].iter().map(|s| s.to_string()).collect();
        let text = compose_interpretation(&Composition::Coffee { symbols: &symbols });
        assert!(text.starts_with("Fincanınızda kuş, yol, yüzük sembolleri"));
        assert!(!text.contains("kalp"));

        let text = compose_interpretation(&Composition::Coffee { symbols: &[] });
        assert_eq!(text, templates::COFFEE_FALLBACK);
    }

    #[test]
    fn parameterized_templates() {
        let profile = NumerologyProfile { life_path: 7, expression: 3, personality: 1 };
        let text = compose_interpretation(&Composition::Numerology(&profile));
        assert!(text.contains("yaşam yolunuz 7, ifade sayınız 3"));

        let text = compose_interpretation(&Composition::Lottery(game_spec("onnumara")));
        assert!(text.contains("On Numara için"));
        let text = compose_interpretation(&Composition::Lottery(game_spec("whatever")));
        assert!(text.contains("Loto için"));
    }

    #[test]
    fn fixed_templates_are_not_empty() {
        assert!(!compose_interpretation(&Composition::Tarot).is_empty());
        assert!(!compose_interpretation(&Composition::Default).is_empty());
    }
}
