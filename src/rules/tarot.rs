use serde::Serialize;

/// A drawn card and the slot of the spread it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TarotCard {
    pub name: &'static str,
    pub meaning: &'static str,
    pub position: &'static str,
}

/// The three-card past / present / future spread.
pub static SPREAD: [TarotCard; 3] = [
    TarotCard { name: "The Fool", meaning: "Yeni başlangıçlar", position: "Geçmiş" },
    TarotCard { name: "The Magician", meaning: "Eylem ve irade", position: "Şimdi" },
    TarotCard { name: "The Star", meaning: "Umut ve rehberlik", position: "Gelecek" },
];
