use std::collections::HashSet;

use crate::GENERAL_MAX;
use crate::rules::games::{FALLBACK_GAME, GAMES, game_spec};
use crate::rules::symbols::{SYMBOLS, numbers_for};

#[test]
fn symbol_table_matches_expected_candidates() {
    // Array of (symbol, expected candidates)
    let cases: Vec<(&str, Vec<u32>)> = vec![
        ("yılan", vec![7, 14, 21]),
        ("su", vec![3, 12, 30]),
        ("elma", vec![5, 15, 25]),
        ("para", vec![8, 18, 28]),
        ("ev", vec![4, 13, 22]),
        ("araba", vec![6, 16, 26]),
        ("köpek", vec![2, 11, 20]),
        ("kedi", vec![9, 19, 29]),
        ("kuş", vec![1, 10, 31]),
        ("ağaç", vec![7, 17, 27]),
        ("çiçek", vec![5, 15, 35]),
        ("bebek", vec![3, 13, 23]),
        ("ölüm", vec![13, 31]),
        ("uçmak", vec![11, 22, 33]),
        ("düşmek", vec![9, 18, 27]),
    ];

    assert_eq!(cases.len(), SYMBOLS.len());
    for (entry, (name, numbers)) in SYMBOLS.iter().zip(&cases) {
        assert_eq!(entry.name, *name, "dictionary order changed");
        assert_eq!(numbers_for(name), Some(numbers.as_slice()), "{name}");
    }
}

#[test]
fn symbol_rows_are_well_formed() {
    let mut names = HashSet::new();
    for entry in SYMBOLS {
        assert!(names.insert(entry.name), "duplicate symbol {}", entry.name);
        assert!((2..=3).contains(&entry.numbers.len()), "{}", entry.name);
        assert!(entry.numbers.iter().all(|n| (1..=GENERAL_MAX).contains(n)), "{}", entry.name);
        assert!(!entry.keywords.is_empty(), "{}", entry.name);
        for kw in entry.keywords {
            assert_eq!(kw.to_lowercase(), *kw, "keyword {kw} must be lower-case");
        }
    }
}

#[test]
fn symbol_macro_builds_rows_inside_the_crate() {
    let entry = symbol!(name: "ay", keywords: ["ay", "moon"], numbers: [2, 20]);
    assert_eq!(entry.name, "ay");
    assert_eq!(entry.keywords, &["ay", "moon"]);
    assert_eq!(entry.numbers, &[2, 20]);
}

#[test]
fn unknown_symbol_has_no_candidates() {
    assert_eq!(numbers_for("fincan"), None);
    assert_eq!(numbers_for("YILAN"), None);
}

#[test]
fn games_fit_their_ranges() {
    for game in GAMES.iter().chain([&FALLBACK_GAME]) {
        assert!(game.count as u32 <= game.max, "{}", game.id);
        assert!(game.max <= GENERAL_MAX, "{}", game.id);
        assert_eq!(game_spec(game.id).display_name, game.display_name);
    }
    assert_eq!(game_spec("").id, FALLBACK_GAME.id);
}
