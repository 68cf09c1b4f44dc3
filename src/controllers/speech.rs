use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderName, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::speech::{SpeechService, SpeechServiceApi, SynthesizeRequest, TokenResponse},
    error::AppResult,
};

pub struct SpeechController {
    speech_service: Arc<SpeechService>,
}

impl SpeechController {
    pub fn new(speech_service: Arc<SpeechService>) -> Self {
        Self { speech_service }
    }

    /// GET /api/get_token - Issue a short-lived speech token for the browser
    pub async fn get_token(
        State(controller): State<Arc<SpeechController>>,
    ) -> AppResult<Json<TokenResponse>> {
        let token = controller.speech_service.issue_token().await?;
        Ok(Json(token))
    }

    /// POST /api/synthesize - Convert text to MP3 speech in the target language
    pub async fn synthesize(
        State(controller): State<Arc<SpeechController>>,
        payload: Result<Json<SynthesizeRequest>, JsonRejection>,
    ) -> AppResult<(StatusCode, [(HeaderName, &'static str); 1], Body)> {
        // A body we cannot read is treated like one with no fields
        let request = match payload {
            Ok(Json(request)) => request,
            Err(rejection) => {
                tracing::warn!(error = %rejection, "Unreadable synthesis request body");
                SynthesizeRequest::default()
            }
        };

        let result = controller
            .speech_service
            .synthesize(
                request.text.unwrap_or_default(),
                request.language.unwrap_or_default(),
            )
            .await?;

        Ok((
            StatusCode::OK,
            [(header::CONTENT_TYPE, "audio/mpeg")],
            Body::from(result.audio_data),
        ))
    }
}
