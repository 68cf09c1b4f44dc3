use super::error::SpeechServiceError;
use super::ssml::build_ssml;
use super::{SynthesisResult, TokenResponse};
use crate::domain::language::{voice_locale, LanguageCatalogRepository};
use crate::infrastructure::repositories::SpeechRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub const MISSING_INPUT_MESSAGE: &str = "Missing text or language";

pub struct SpeechService {
    speech_repo: Arc<dyn SpeechRepository>,
    catalog_repo: Arc<dyn LanguageCatalogRepository>,
}

impl SpeechService {
    pub fn new(
        speech_repo: Arc<dyn SpeechRepository>,
        catalog_repo: Arc<dyn LanguageCatalogRepository>,
    ) -> Self {
        Self {
            speech_repo,
            catalog_repo,
        }
    }
}

#[async_trait]
pub trait SpeechServiceApi: Send + Sync {
    /// Exchange the server-held key for a short-lived token.
    ///
    /// A new token is requested on every call.
    async fn issue_token(&self) -> Result<TokenResponse, SpeechServiceError>;

    /// Synthesize `text` with the voice registered for `language`.
    ///
    /// This operation:
    /// - Rejects empty text or language
    /// - Resolves the voice and its locale from the voice map
    /// - Sends one SSML request to the provider
    async fn synthesize(
        &self,
        text: String,
        language: String,
    ) -> Result<SynthesisResult, SpeechServiceError>;
}

#[async_trait]
impl SpeechServiceApi for SpeechService {
    async fn issue_token(&self) -> Result<TokenResponse, SpeechServiceError> {
        let token = self
            .speech_repo
            .issue_token()
            .await
            .map_err(SpeechServiceError::Dependency)?;

        Ok(TokenResponse {
            token,
            region: self.speech_repo.region().to_string(),
        })
    }

    async fn synthesize(
        &self,
        text: String,
        language: String,
    ) -> Result<SynthesisResult, SpeechServiceError> {
        if text.is_empty() || language.is_empty() {
            return Err(SpeechServiceError::Invalid(MISSING_INPUT_MESSAGE.to_string()));
        }

        let voice = self.catalog_repo.voice_for(&language).ok_or_else(|| {
            SpeechServiceError::Invalid(format!(
                "No voice available for language code: {}",
                language
            ))
        })?;
        let locale = voice_locale(&voice);

        tracing::info!(
            language = %language,
            voice = %voice,
            locale = %locale,
            text_length = text.len(),
            "TTS synthesis request"
        );

        let ssml = build_ssml(&locale, &voice, &text);
        let audio_data = self
            .speech_repo
            .synthesize(&ssml)
            .await
            .map_err(SpeechServiceError::Dependency)?;

        Ok(SynthesisResult {
            audio_data,
            voice,
            locale,
        })
    }
}
