use super::speech_repository::SpeechRepository;
use crate::infrastructure::config::{Config, SpeechCredentials};
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};

pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
pub const OUTPUT_FORMAT_HEADER: &str = "X-Microsoft-OutputFormat";
pub const MP3_OUTPUT_FORMAT: &str = "audio-16khz-128kbitrate-mono-mp3";
pub const SSML_CONTENT_TYPE: &str = "application/ssml+xml";
pub const RELAY_USER_AGENT: &str = "speech-relay";

/// Provider URLs for one region
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechEndpoints {
    pub token_url: String,
    pub synthesis_url: String,
}

impl SpeechEndpoints {
    pub fn for_region(region: &str) -> Self {
        Self {
            token_url: format!(
                "https://{}.api.cognitive.microsoft.com/sts/v1.0/issueToken",
                region
            ),
            synthesis_url: format!(
                "https://{}.tts.speech.microsoft.com/cognitiveservices/v1",
                region
            ),
        }
    }

    /// Regional endpoints, with any URL overrides from the configuration applied
    pub fn from_config(config: &Config) -> Self {
        let regional = Self::for_region(&config.speech.region);
        Self {
            token_url: config
                .speech_token_url
                .clone()
                .unwrap_or(regional.token_url),
            synthesis_url: config
                .speech_synthesis_url
                .clone()
                .unwrap_or(regional.synthesis_url),
        }
    }
}

/// Azure Speech implementation of the speech repository
pub struct AzureSpeechRepository {
    credentials: SpeechCredentials,
    endpoints: SpeechEndpoints,
    http_client: reqwest::Client,
}

impl AzureSpeechRepository {
    pub fn new(credentials: SpeechCredentials) -> Self {
        let endpoints = SpeechEndpoints::for_region(&credentials.region);
        Self::with_endpoints(credentials, endpoints)
    }

    pub fn with_endpoints(credentials: SpeechCredentials, endpoints: SpeechEndpoints) -> Self {
        Self {
            credentials,
            endpoints,
            http_client: reqwest::Client::new(),
        }
    }

    fn token_request(&self) -> reqwest::RequestBuilder {
        self.http_client
            .post(&self.endpoints.token_url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.credentials.subscription_key)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body("")
    }

    fn synthesis_request(&self, ssml: &str) -> reqwest::RequestBuilder {
        self.http_client
            .post(&self.endpoints.synthesis_url)
            .header(SUBSCRIPTION_KEY_HEADER, &self.credentials.subscription_key)
            .header(CONTENT_TYPE, SSML_CONTENT_TYPE)
            .header(OUTPUT_FORMAT_HEADER, MP3_OUTPUT_FORMAT)
            .header(USER_AGENT, RELAY_USER_AGENT)
            .body(ssml.as_bytes().to_vec())
    }
}

#[async_trait]
impl SpeechRepository for AzureSpeechRepository {
    fn region(&self) -> &str {
        &self.credentials.region
    }

    async fn issue_token(&self) -> Result<String, String> {
        let start_time = std::time::Instant::now();

        let response = self
            .token_request()
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    region = %self.credentials.region,
                    "Azure token request failed"
                );
                e.to_string()
            })?;

        let token = response.text().await.map_err(|e| e.to_string())?;

        tracing::info!(
            provider = "azure",
            region = %self.credentials.region,
            latency_ms = start_time.elapsed().as_millis(),
            "Speech token issued"
        );

        Ok(token)
    }

    async fn synthesize(&self, ssml: &str) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        let response = self
            .synthesis_request(ssml)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    region = %self.credentials.region,
                    ssml_length = ssml.len(),
                    "Azure synthesis request failed"
                );
                e.to_string()
            })?;

        let audio_data = response.bytes().await.map_err(|e| e.to_string())?.to_vec();

        tracing::info!(
            provider = "azure",
            region = %self.credentials.region,
            latency_ms = start_time.elapsed().as_millis(),
            ssml_length = ssml.len(),
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }
}
