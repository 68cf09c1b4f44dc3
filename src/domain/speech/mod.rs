pub mod error;
pub mod service;
pub mod ssml;

pub use error::SpeechServiceError;
pub use service::{SpeechService, SpeechServiceApi};
pub use ssml::build_ssml;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Response for GET /api/get_token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub token: String,
    pub region: String,
}

/// Request for POST /api/synthesize
///
/// Both fields are optional on the wire so that a missing field is reported
/// the same way as an empty one. Numbers are accepted and stringified; zero,
/// booleans, arrays and objects count as missing.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SynthesizeRequest {
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub language: Option<String>,
}

fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    })
}

#[derive(Debug, Clone)]
pub struct SynthesisResult {
    pub audio_data: Vec<u8>,
    pub voice: String,
    pub locale: String,
}
