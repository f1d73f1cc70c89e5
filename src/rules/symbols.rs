use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::SymbolEntry;

/// The symbol dictionary in extraction order.
///
/// Keywords are lower-case and matched as plain substrings of the lower-cased
/// input, so short keywords such as `"su"` or `"ev"` also fire inside longer
/// words. Both Turkish and English triggers are listed.
pub static SYMBOLS: &[SymbolEntry] = &[
    symbol!(name: "yılan", keywords: ["yılan", "snake"], numbers: [7, 14, 21]),
    symbol!(name: "su", keywords: ["su", "deniz", "nehir", "göl"], numbers: [3, 12, 30]),
    symbol!(name: "elma", keywords: ["elma", "apple"], numbers: [5, 15, 25]),
    symbol!(name: "para", keywords: ["para", "altın", "banknot"], numbers: [8, 18, 28]),
    symbol!(name: "ev", keywords: ["ev", "evim", "evimiz", "house"], numbers: [4, 13, 22]),
    symbol!(name: "araba", keywords: ["araba", "araç", "car"], numbers: [6, 16, 26]),
    symbol!(name: "köpek", keywords: ["köpek", "dog"], numbers: [2, 11, 20]),
    symbol!(name: "kedi", keywords: ["kedi", "cat"], numbers: [9, 19, 29]),
    symbol!(name: "kuş", keywords: ["kuş", "bird"], numbers: [1, 10, 31]),
    symbol!(name: "ağaç", keywords: ["ağaç", "tree"], numbers: [7, 17, 27]),
    symbol!(name: "çiçek", keywords: ["çiçek", "flower"], numbers: [5, 15, 35]),
    symbol!(name: "bebek", keywords: ["bebek", "baby"], numbers: [3, 13, 23]),
    symbol!(name: "ölüm", keywords: ["ölüm", "ölü", "death"], numbers: [13, 31]),
    symbol!(name: "uçmak", keywords: ["uçmak", "uçtu", "fly"], numbers: [11, 22, 33]),
    symbol!(name: "düşmek", keywords: ["düşmek", "düştü", "fall"], numbers: [9, 18, 27]),
];

/// Symbol name -> candidate numbers.
static SYMBOL_INDEX: Lazy<HashMap<&'static str, &'static [u32]>> =
    Lazy::new(|| SYMBOLS.iter().map(|entry| (entry.name, entry.numbers)).collect());

/// Candidate numbers for a canonical symbol name, or `None` for names the
/// dictionary does not know.
pub fn numbers_for(symbol: &str) -> Option<&'static [u32]> {
    SYMBOL_INDEX.get(symbol).copied()
}
