use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Draw parameters for one lottery game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSpec {
    pub id: &'static str,
    pub display_name: &'static str,
    /// How many distinct main numbers are drawn.
    pub count: usize,
    /// Main numbers are drawn from `1..=max`.
    pub max: u32,
    /// Joker range `1..=joker_max`, for games that draw one.
    pub joker_max: Option<u32>,
}

/// Game id used when the payload names none.
pub const DEFAULT_GAME_ID: &str = "sayisal";

pub static GAMES: &[GameSpec] = &[
    GameSpec { id: "sayisal", display_name: "Sayısal", count: 6, max: 54, joker_max: None },
    GameSpec { id: "super", display_name: "Süper", count: 6, max: 54, joker_max: None },
    GameSpec { id: "onnumara", display_name: "On Numara", count: 10, max: 80, joker_max: None },
    GameSpec { id: "sans", display_name: "Şans Topu", count: 5, max: 34, joker_max: Some(14) },
];

/// Parameters for any game id not listed in [`GAMES`].
pub static FALLBACK_GAME: GameSpec = GameSpec { id: "loto", display_name: "Loto", count: 6, max: 54, joker_max: None };

static GAME_INDEX: Lazy<HashMap<&'static str, &'static GameSpec>> =
    Lazy::new(|| GAMES.iter().map(|game| (game.id, game)).collect());

/// Look up the draw parameters for `id`. Unknown ids get the generic "Loto" game.
///
/// ```
/// let sans = kismet::game_spec("sans");
/// assert_eq!((sans.count, sans.max, sans.joker_max), (5, 34, Some(14)));
/// assert_eq!(kismet::game_spec("keno").display_name, "Loto");
/// ```
pub fn game_spec(id: &str) -> &'static GameSpec {
    GAME_INDEX.get(id).copied().unwrap_or(&FALLBACK_GAME)
}
