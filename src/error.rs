use thiserror::Error;

/// Why a [`Payload`](crate::Payload) could not be turned into an
/// [`AnalysisRequest`](crate::AnalysisRequest).
///
/// These never reach the caller of [`analyze_payload`](crate::analyze_payload):
/// the dispatcher logs them and answers with the default result instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    #[error("unknown service id: {0}")]
    UnknownService(String),

    #[error("service `{service}` requires field `{field}`")]
    MissingField { service: &'static str, field: &'static str },
}
