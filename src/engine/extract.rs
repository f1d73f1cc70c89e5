//! Symbol extraction.

use tracing::debug;

use crate::MAX_SYMBOLS;
use crate::rules::symbols::SYMBOLS;

/// Scan `text` against the symbol dictionary and return the recognized
/// symbols in dictionary order, at most [`MAX_SYMBOLS`] of them.
///
/// A symbol fires when any of its keywords occurs as a substring of the
/// lower-cased text. Text that matches nothing (including `""`) yields an
/// empty list.
///
/// ```
/// assert_eq!(kismet::extract_symbols("Bir yılan ve bir elma"), vec!["yılan", "elma"]);
/// assert!(kismet::extract_symbols("").is_empty());
/// ```
pub fn extract_symbols(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    let mut found = Vec::with_capacity(MAX_SYMBOLS);

    for entry in SYMBOLS {
        if found.len() == MAX_SYMBOLS {
            break;
        }
        if entry.keywords.iter().any(|kw| lower.contains(kw)) {
            found.push(entry.name);
        }
    }

    debug!(target: "kismet", symbols = ?found, "extracted symbols");
    found
}
