//! Canned interpretation text.
//!
//! Dream readings are picked from [`DREAM_DECISIONS`]: the first row whose
//! motif is present wins, otherwise [`DREAM_FALLBACK`] is used. The remaining
//! services use a single template each, some of them parameterized.

use crate::engine::MotifMask;

pub static DREAM_DECISIONS: &[(MotifMask, &str)] = &[
    (
        MotifMask::WATER,
        "Su, duygusal temizliği ve yenilenmeyi işaret eder. Enerji seviyeniz yüksek, önemli kararlar almak için uygun bir dönemdesiniz.",
    ),
    (MotifMask::MONEY, "Maddi güç sembolleri, bolluk ve bereketi işaret ediyor. Finansal konularda şansınız yüksek."),
    (MotifMask::SNAKE, "Yılan sembolü, dönüşüm ve yenilenmeyi temsil eder. Hayatınızda önemli değişiklikler kapıda."),
];

pub const DREAM_FALLBACK: &str = "Rüyanızdaki semboller, kozmik enerjilerle uyum içinde olduğunuzu gösteriyor. Şansınızın zirvesinde olduğunuzu unutmayın.";

pub fn dream_symbol_prefix(symbols: &str) -> String {
    format!("Rüyanızdaki {symbols} sembolleri güçlü kozmik mesajlar taşıyor. ")
}

pub fn coffee_with_symbols(symbols: &str) -> String {
    format!("Fincanınızda {symbols} sembolleri görünüyor. Bu semboller, yakın geleceğinizde önemli gelişmelerin habercisi.")
}

pub const COFFEE_FALLBACK: &str =
    "Fincanınızda güçlü enerji desenleri görünüyor. Önümüzdeki haftalarda şansınız yüksek olacak.";

pub const COFFEE_TIME_FRAME: &str = "Önümüzdeki 2-3 hafta";

pub fn numerology(life_path: u32, expression: u32) -> String {
    format!(
        "Doğum tarihinize göre yaşam yolunuz {life_path}, ifade sayınız {expression}. Bu sayılar, kişiliğinizin derin katmanlarını yansıtıyor ve kozmik enerjinizle uyum içinde."
    )
}

pub const TAROT_INTERPRETATION: &str = "Kartlarınız, hayatınızda önemli bir dönüşüm noktasında olduğunuzu gösteriyor. Geçmişten aldığınız dersler, şimdiki eylemlerinizle birleşerek parlak bir gelecek yaratıyor.";

pub const TAROT_GUIDANCE: &str = "İç sesinize güvenin ve cesaretle ilerleyin. Evren sizinle.";

pub fn lottery(display_name: &str) -> String {
    format!("Kişisel enerji haritanıza göre şanslı kombinasyonunuz hazır. {display_name} için özel numaralarınız.")
}

pub const DEFAULT_INTERPRETATION: &str = "Analiz tamamlandı. Kozmik enerjiler sizin lehinize çalışıyor.";
