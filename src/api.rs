use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::engine::{self, RandomSource, RngSource};
use crate::error::PayloadError;
use crate::rules::games::DEFAULT_GAME_ID;
use crate::rules::tarot::TarotCard;

/// The five analysis services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Dream,
    Numerology,
    Coffee,
    Tarot,
    Lottery,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 5] =
        [ServiceKind::Dream, ServiceKind::Numerology, ServiceKind::Coffee, ServiceKind::Tarot, ServiceKind::Lottery];

    /// The wire identifier, e.g. `"dream"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceKind::Dream => "dream",
            ServiceKind::Numerology => "numerology",
            ServiceKind::Coffee => "coffee",
            ServiceKind::Tarot => "tarot",
            ServiceKind::Lottery => "lottery",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceKind {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| PayloadError::UnknownService(s.to_string()))
    }
}

/// A typed analysis request, one variant per service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisRequest {
    /// Free dream narrative, usually already transcribed from speech.
    Dream { text: String },
    Numerology { name: String, birth_date: String },
    /// Symbols read from a coffee cup; only the first five are used.
    Coffee { symbols: Vec<String> },
    Tarot,
    /// `game_type` is a game id such as `"sans"`; unknown ids draw the
    /// generic game. `birth_date` is accepted but does not change the draw.
    Lottery { game_type: String, birth_date: Option<String> },
}

impl AnalysisRequest {
    pub fn service(&self) -> ServiceKind {
        match self {
            AnalysisRequest::Dream { .. } => ServiceKind::Dream,
            AnalysisRequest::Numerology { .. } => ServiceKind::Numerology,
            AnalysisRequest::Coffee { .. } => ServiceKind::Coffee,
            AnalysisRequest::Tarot => ServiceKind::Tarot,
            AnalysisRequest::Lottery { .. } => ServiceKind::Lottery,
        }
    }
}

/// Loosely-typed request as it arrives from a presentation layer.
///
/// ```
/// let payload: kismet::Payload = serde_json::from_str(r#"{"serviceId":"lottery","gameType":"sans"}"#).unwrap();
/// let request = payload.into_request().unwrap();
/// assert_eq!(request.service(), kismet::ServiceKind::Lottery);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Payload {
    pub service_id: String,
    #[serde(alias = "transcript", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbols: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_type: Option<String>,
}

impl Payload {
    pub fn new(service_id: impl Into<String>) -> Self {
        Payload { service_id: service_id.into(), ..Payload::default() }
    }

    /// Validate the payload against its service's required fields.
    ///
    /// An empty string counts as present; only absent fields are rejected.
    /// The lottery `gameType` is the exception: empty picks the default game.
    pub fn into_request(self) -> Result<AnalysisRequest, PayloadError> {
        let service: ServiceKind = self.service_id.parse()?;
        let missing = |field| PayloadError::MissingField { service: service.as_str(), field };

        let request = match service {
            ServiceKind::Dream => AnalysisRequest::Dream { text: self.text.ok_or_else(|| missing("text"))? },
            ServiceKind::Numerology => AnalysisRequest::Numerology {
                name: self.name.ok_or_else(|| missing("name"))?,
                birth_date: self.birth_date.ok_or_else(|| missing("birthDate"))?,
            },
            ServiceKind::Coffee => AnalysisRequest::Coffee { symbols: self.symbols.unwrap_or_default() },
            ServiceKind::Tarot => AnalysisRequest::Tarot,
            ServiceKind::Lottery => AnalysisRequest::Lottery {
                game_type: self
                    .game_type
                    .filter(|game| !game.is_empty())
                    .unwrap_or_else(|| DEFAULT_GAME_ID.to_string()),
                birth_date: self.birth_date,
            },
        };
        Ok(request)
    }
}

impl From<AnalysisRequest> for Payload {
    fn from(request: AnalysisRequest) -> Self {
        let mut payload = Payload::new(request.service().as_str());
        match request {
            AnalysisRequest::Dream { text } => payload.text = Some(text),
            AnalysisRequest::Numerology { name, birth_date } => {
                payload.name = Some(name);
                payload.birth_date = Some(birth_date);
            }
            AnalysisRequest::Coffee { symbols } => payload.symbols = Some(symbols),
            AnalysisRequest::Tarot => {}
            AnalysisRequest::Lottery { game_type, birth_date } => {
                payload.game_type = Some(game_type);
                payload.birth_date = birth_date;
            }
        }
        payload
    }
}

// --- Results ------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DreamAnalysis {
    pub interpretation: String,
    /// Six distinct ascending numbers in `1..=90`.
    pub numbers: Vec<u32>,
    /// In `1..=10`.
    pub joker: u32,
    /// Extracted symbols in dictionary order, at most five.
    pub symbols: Vec<String>,
    /// In `75..=94`.
    pub energy_level: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyAnalysis {
    pub life_path: u32,
    pub expression: u32,
    pub personality: u32,
    pub lucky_numbers: Vec<u32>,
    pub interpretation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoffeeAnalysis {
    pub symbols: Vec<String>,
    pub interpretation: String,
    pub lucky_numbers: Vec<u32>,
    pub time_frame: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TarotAnalysis {
    pub cards: Vec<TarotCard>,
    pub interpretation: String,
    pub guidance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LotteryAnalysis {
    pub numbers: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joker: Option<u32>,
    pub interpretation: String,
    /// The requested game id, echoed back.
    pub game_type: String,
}

/// Answer for unknown services and payloads missing required fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultAnalysis {
    pub interpretation: String,
    pub numbers: Vec<u32>,
    pub joker: u32,
}

/// Result of one analysis. Serializes with a `service` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "service", rename_all = "lowercase")]
pub enum AnalysisResult {
    Dream(DreamAnalysis),
    Numerology(NumerologyAnalysis),
    Coffee(CoffeeAnalysis),
    Tarot(TarotAnalysis),
    Lottery(LotteryAnalysis),
    Default(DefaultAnalysis),
}

impl AnalysisResult {
    /// The service that produced this result; `None` for the default result.
    pub fn service(&self) -> Option<ServiceKind> {
        match self {
            AnalysisResult::Dream(_) => Some(ServiceKind::Dream),
            AnalysisResult::Numerology(_) => Some(ServiceKind::Numerology),
            AnalysisResult::Coffee(_) => Some(ServiceKind::Coffee),
            AnalysisResult::Tarot(_) => Some(ServiceKind::Tarot),
            AnalysisResult::Lottery(_) => Some(ServiceKind::Lottery),
            AnalysisResult::Default(_) => None,
        }
    }

    pub fn interpretation(&self) -> &str {
        match self {
            AnalysisResult::Dream(r) => &r.interpretation,
            AnalysisResult::Numerology(r) => &r.interpretation,
            AnalysisResult::Coffee(r) => &r.interpretation,
            AnalysisResult::Tarot(r) => &r.interpretation,
            AnalysisResult::Lottery(r) => &r.interpretation,
            AnalysisResult::Default(r) => &r.interpretation,
        }
    }

    /// The main number set. Tarot carries none.
    pub fn numbers(&self) -> Option<&[u32]> {
        match self {
            AnalysisResult::Dream(r) => Some(&r.numbers),
            AnalysisResult::Numerology(r) => Some(&r.lucky_numbers),
            AnalysisResult::Coffee(r) => Some(&r.lucky_numbers),
            AnalysisResult::Tarot(_) => None,
            AnalysisResult::Lottery(r) => Some(&r.numbers),
            AnalysisResult::Default(r) => Some(&r.numbers),
        }
    }

    pub fn joker(&self) -> Option<u32> {
        match self {
            AnalysisResult::Dream(r) => Some(r.joker),
            AnalysisResult::Lottery(r) => r.joker,
            AnalysisResult::Default(r) => Some(r.joker),
            AnalysisResult::Numerology(_) | AnalysisResult::Coffee(_) | AnalysisResult::Tarot(_) => None,
        }
    }
}

// --- Entry points -------------------------------------------------------------

/// Analyze `request` with an entropy-seeded random source.
///
/// # Example
/// ```
/// use kismet::{AnalysisRequest, analyze};
///
/// let out = analyze(&AnalysisRequest::Dream { text: "yılan... elma...".into() });
/// assert_eq!(out.numbers().unwrap().len(), 6);
/// ```
pub fn analyze(request: &AnalysisRequest) -> AnalysisResult {
    analyze_with(request, &mut RngSource::from_entropy())
}

/// Analyze `request`, drawing every random value from `rng`.
///
/// Use this with [`RngSource::seeded`](crate::RngSource::seeded) or a
/// [`ScriptedSource`](crate::ScriptedSource) for reproducible output.
pub fn analyze_with<R>(request: &AnalysisRequest, rng: &mut R) -> AnalysisResult
where
    R: RandomSource + ?Sized,
{
    engine::dispatch(request, rng)
}

/// Analyze a loosely-typed payload with an entropy-seeded random source.
pub fn analyze_payload(payload: Payload) -> AnalysisResult {
    analyze_payload_with(payload, &mut RngSource::from_entropy())
}

/// Analyze a loosely-typed payload. Unknown services and missing required
/// fields never fail: they produce [`AnalysisResult::Default`].
pub fn analyze_payload_with<R>(payload: Payload, rng: &mut R) -> AnalysisResult
where
    R: RandomSource + ?Sized,
{
    match payload.into_request() {
        Ok(request) => {
            debug!(target: "kismet", service = %request.service(), "dispatching payload");
            engine::dispatch(&request, rng)
        }
        Err(err) => {
            warn!(target: "kismet", error = %err, "falling back to the default result");
            engine::default_result(rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ScriptedSource;

    #[test]
    fn service_ids_round_trip() {
        for kind in ServiceKind::ALL {
            assert_eq!(kind.as_str().parse::<ServiceKind>(), Ok(kind));
        }
        assert_eq!("Dream".parse::<ServiceKind>(), Err(PayloadError::UnknownService("Dream".into())));
    }

    #[test]
    fn payload_from_json() {
        let payload: Payload =
            serde_json::from_str(r#"{"serviceId":"dream","transcript":"bir kedi"}"#).unwrap();
        assert_eq!(payload.into_request(), Ok(AnalysisRequest::Dream { text: "bir kedi".into() }));

        let payload: Payload =
            serde_json::from_str(r#"{"serviceId":"numerology","name":"Ada","birthDate":"1990-07-15"}"#).unwrap();
        assert_eq!(
            payload.into_request(),
            Ok(AnalysisRequest::Numerology { name: "Ada".into(), birth_date: "1990-07-15".into() })
        );
    }

    #[test]
    fn payload_defaults_for_optional_fields() {
        assert_eq!(Payload::new("coffee").into_request(), Ok(AnalysisRequest::Coffee { symbols: vec![] }));
        assert_eq!(Payload::new("tarot").into_request(), Ok(AnalysisRequest::Tarot));
        assert_eq!(
            Payload::new("lottery").into_request(),
            Ok(AnalysisRequest::Lottery { game_type: "sayisal".into(), birth_date: None })
        );
    }

    #[test]
    fn empty_game_type_draws_the_default_game() {
        let payload: Payload = serde_json::from_str(r#"{"serviceId":"lottery","gameType":""}"#).unwrap();
        assert_eq!(
            payload.clone().into_request(),
            Ok(AnalysisRequest::Lottery { game_type: "sayisal".into(), birth_date: None })
        );

        let AnalysisResult::Lottery(result) = analyze_payload_with(payload, &mut RngSource::seeded(1)) else {
            panic!("expected a lottery result");
        };
        assert_eq!(result.game_type, "sayisal");
        assert!(result.interpretation.contains("Sayısal için"));
        assert_eq!(result.numbers.len(), 6);
        assert!(result.numbers.iter().all(|&n| (1..=54).contains(&n)));
    }

    #[test]
    fn payload_missing_required_fields() {
        assert_eq!(
            Payload::new("dream").into_request(),
            Err(PayloadError::MissingField { service: "dream", field: "text" })
        );
        let payload = Payload { name: Some(String::new()), ..Payload::new("numerology") };
        assert_eq!(
            payload.into_request(),
            Err(PayloadError::MissingField { service: "numerology", field: "birthDate" })
        );
    }

    #[test]
    fn empty_text_is_a_present_field() {
        let payload = Payload { text: Some(String::new()), ..Payload::new("dream") };
        assert_eq!(payload.into_request(), Ok(AnalysisRequest::Dream { text: String::new() }));
    }

    #[test]
    fn request_converts_back_to_payload() {
        let request = AnalysisRequest::Lottery { game_type: "sans".into(), birth_date: Some("2000-01-01".into()) };
        let payload = Payload::from(request.clone());
        assert_eq!(payload.service_id, "lottery");
        assert_eq!(payload.into_request(), Ok(request));
    }

    #[test]
    fn unknown_service_degrades_to_default() {
        let mut rng = ScriptedSource::new([0, 1, 2, 3, 4, 5, 6]);
        let result = analyze_payload_with(Payload::new("unknown"), &mut rng);
        assert_eq!(result.service(), None);
        assert_eq!(result.numbers(), Some(&[1, 2, 3, 4, 5, 6][..]));
        assert_eq!(result.joker(), Some(7));
        assert!(!result.interpretation().is_empty());
    }

    #[test]
    fn repeated_calls_keep_the_same_shape() {
        let requests = [
            AnalysisRequest::Dream { text: "Rüyamda denizde bir yılan gördüm".into() },
            AnalysisRequest::Numerology { name: "Ada".into(), birth_date: "2000-01-01".into() },
            AnalysisRequest::Coffee { symbols: vec!["kuş".into(), "yol".into()] },
            AnalysisRequest::Tarot,
            AnalysisRequest::Lottery { game_type: "onnumara".into(), birth_date: None },
        ];

        for request in &requests {
            let first = analyze(request);
            for _ in 0..20 {
                let next = analyze(request);
                assert_eq!(next.service(), first.service());
                assert_eq!(next.numbers().map(<[u32]>::len), first.numbers().map(<[u32]>::len));
                assert_eq!(next.joker().is_some(), first.joker().is_some());
                if let Some(numbers) = next.numbers() {
                    assert!(numbers.windows(2).all(|w| w[0] < w[1]), "{numbers:?}");
                    assert!(numbers.iter().all(|&n| (1..=crate::GENERAL_MAX).contains(&n)));
                }
            }
        }
    }

    #[test]
    fn results_serialize_with_a_service_tag() {
        let mut rng = ScriptedSource::new([0, 1, 2, 3, 4, 13]);
        let result = analyze_with(&AnalysisRequest::Lottery { game_type: "sans".into(), birth_date: None }, &mut rng);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["service"], "lottery");
        assert_eq!(json["gameType"], "sans");
        assert_eq!(json["numbers"], serde_json::json!([1, 2, 3, 4, 5]));
        assert_eq!(json["joker"], 14);
    }
}
