use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::application::services::{SpeechError, SpeechInput};
use crate::presentation::state::AppState;

use super::error_response::error_response;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSpeechRequest {
    pub text: Option<String>,
    pub voice_id: Option<String>,
    pub stability: Option<f32>,
    pub similarity_boost: Option<f32>,
}

#[tracing::instrument(skip(state, request))]
pub async fn generate_speech_handler(
    State(state): State<AppState>,
    request: Result<Json<GenerateSpeechRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match request {
        Ok(r) => r,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.body_text()),
    };

    let input = SpeechInput {
        text: request.text,
        voice_id: request.voice_id,
        stability: request.stability,
        similarity_boost: request.similarity_boost,
    };

    match state.speech.generate(input).await {
        Ok(audio) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, audio.content_type),
                (header::CONTENT_LENGTH, audio.data.len().to_string()),
            ],
            Body::from(audio.data),
        )
            .into_response(),
        Err(e @ SpeechError::MissingFields) => {
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e) => {
            tracing::error!(error = %e, "Speech generation failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
