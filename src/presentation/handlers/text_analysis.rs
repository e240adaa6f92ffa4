use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::services::TextAnalysisError;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error_response::error_response;

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: Option<Value>,
}

impl TextRequest {
    fn text(&self) -> &str {
        self.text.as_ref().and_then(Value::as_str).unwrap_or_default()
    }
}

#[derive(Serialize)]
pub struct TopicResponse {
    pub topic: String,
}

#[derive(Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn get_topic_handler(
    State(state): State<AppState>,
    request: Result<Json<TextRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match request {
        Ok(r) => r,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.body_text()),
    };

    tracing::debug!(text = %sanitize_prompt(request.text()), "Classifying topic");

    match state.text_analysis.classify_topic(request.text()).await {
        Ok(topic) => (StatusCode::OK, Json(TopicResponse { topic })).into_response(),
        Err(TextAnalysisError::EmptyText) => {
            error_response(StatusCode::BAD_REQUEST, "Missing required field: text")
        }
        Err(e) => {
            tracing::error!(error = %e, "Topic classification failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn summarize_handler(
    State(state): State<AppState>,
    request: Result<Json<TextRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match request {
        Ok(r) => r,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.body_text()),
    };

    tracing::debug!(text = %sanitize_prompt(request.text()), "Summarizing document");

    match state.text_analysis.summarize(request.text()).await {
        Ok(summary) => (StatusCode::OK, Json(SummaryResponse { summary })).into_response(),
        Err(TextAnalysisError::EmptyText) => {
            error_response(StatusCode::BAD_REQUEST, "Invalid or missing text input")
        }
        Err(e) => {
            tracing::error!(error = %e, "Summarization failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
