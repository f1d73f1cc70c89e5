//! Trigger scanning (motif pre-classification).
//!
//! This module inspects lower-cased free text and produces coarse motif flags
//! that let the composer pick a narrative template without re-scanning the
//! text once per template.
//!
//! ## Design notes
//!
//! - This is a *heuristic* scan over raw substrings, the same matching the
//!   symbol dictionary uses. `"su"` therefore also fires inside words such as
//!   `"sus"`; the composer accepts that.
//! - Motifs are independent of the 5-symbol cap applied by extraction, so a
//!   text with many symbols still selects its template from the full text.

use tracing::trace;

bitflags::bitflags! {
    /// Motifs that select a dream template.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MotifMask: u8 {
        const WATER = 1 << 0;
        const MONEY = 1 << 1;
        const SNAKE = 1 << 2;
    }
}

/// Motif keywords in the order they are tested.
const MOTIF_KEYWORDS: &[(MotifMask, &[&str])] = &[
    (MotifMask::WATER, &["su", "deniz"]),
    (MotifMask::MONEY, &["para", "altın"]),
    (MotifMask::SNAKE, &["yılan"]),
];

/// Motif characteristics detected from the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerInfo {
    pub motifs: MotifMask,
}

impl TriggerInfo {
    /// Scan `text` for motifs. Case is folded with `to_lowercase`, so Turkish
    /// letters such as `Ş`/`ş` compare equal.
    pub fn scan(text: &str) -> Self {
        let lower = text.to_lowercase();
        let mut motifs = MotifMask::empty();

        for (motif, keywords) in MOTIF_KEYWORDS {
            if keywords.iter().any(|kw| lower.contains(kw)) {
                motifs |= *motif;
            }
        }

        trace!(target: "kismet", ?motifs, "trigger scan");
        TriggerInfo { motifs }
    }
}
