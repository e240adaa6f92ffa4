use std::sync::Arc;

use crate::application::services::{SpeechService, TextAnalysisService, TranscriptionWorkflow};

#[derive(Clone)]
pub struct AppState {
    pub transcription: Arc<TranscriptionWorkflow>,
    pub text_analysis: Arc<TextAnalysisService>,
    pub speech: Arc<SpeechService>,
    pub max_upload_bytes: usize,
}
