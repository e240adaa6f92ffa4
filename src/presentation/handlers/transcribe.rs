use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::AudioPayload;
use crate::presentation::state::AppState;

use super::error_response::error_response;

pub const AUDIO_FIELD: &str = "audio";
const NO_AUDIO: &str = "No audio file provided";

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let mut multipart = match multipart {
        Ok(m) => m,
        Err(e) => {
            tracing::warn!(error = %e, "Transcription request is not a multipart form");
            return error_response(StatusCode::BAD_REQUEST, NO_AUDIO);
        }
    };

    let payload = match read_audio_field(&mut multipart).await {
        Ok(Some(payload)) if !payload.is_empty() => payload,
        Ok(_) => {
            tracing::warn!("Transcription request with no audio");
            return error_response(StatusCode::BAD_REQUEST, NO_AUDIO);
        }
        Err(response) => return response,
    };

    tracing::debug!(
        bytes = payload.len(),
        media_type = ?payload.media_type(),
        "Audio received"
    );

    match state.transcription.transcribe(payload).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) if e.is_invalid_input() => error_response(StatusCode::BAD_REQUEST, e.to_string()),
        Err(e) => {
            tracing::error!(error = %e, "Transcription failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

async fn read_audio_field(multipart: &mut Multipart) -> Result<Option<AudioPayload>, Response> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Ok(None),
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return Err(error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to read multipart: {}", e),
                ));
            }
        };

        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }

        let media_type = field.content_type().map(str::to_string);
        return match field.bytes().await {
            Ok(data) => Ok(Some(AudioPayload::new(data, media_type))),
            Err(e) => {
                tracing::error!(error = %e, "Failed to read audio bytes");
                Err(error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to read audio: {}", e),
                ))
            }
        };
    }
}
