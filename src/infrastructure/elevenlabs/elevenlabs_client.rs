use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;

use crate::application::ports::{
    SpeechRequest, SpeechSynthesisError, SpeechSynthesizer, SynthesizedAudio, VoiceSettings,
};

pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";
pub const DEFAULT_MODEL_ID: &str = "eleven_monolingual_v1";

const AUDIO_MPEG: &str = "audio/mpeg";

pub struct ElevenLabsClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model_id: String,
}

impl ElevenLabsClient {
    pub fn new(api_key: String, base_url: Option<String>, model_id: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            model_id: model_id.unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
        }
    }
}

#[derive(Serialize)]
struct TextToSpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: &'a VoiceSettings,
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsClient {
    async fn synthesize(
        &self,
        request: &SpeechRequest,
    ) -> Result<SynthesizedAudio, SpeechSynthesisError> {
        let url = format!("{}/v1/text-to-speech/{}", self.base_url, request.voice_id);

        let body = TextToSpeechRequest {
            text: &request.text,
            model_id: &self.model_id,
            voice_settings: &request.voice,
        };

        tracing::debug!(
            voice_id = %request.voice_id,
            model = %self.model_id,
            "Requesting speech synthesis"
        );

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .header(ACCEPT, AUDIO_MPEG)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                SpeechSynthesisError::ApiRequestFailed(format!("ElevenLabs request: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SpeechSynthesisError::ApiRequestFailed(format!(
                "ElevenLabs API error: {} - {}",
                status.as_u16(),
                body
            )));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(AUDIO_MPEG)
            .to_string();

        let data = response.bytes().await.map_err(|e| {
            SpeechSynthesisError::ApiRequestFailed(format!("ElevenLabs body: {}", e))
        })?;

        Ok(SynthesizedAudio { data, content_type })
    }
}
