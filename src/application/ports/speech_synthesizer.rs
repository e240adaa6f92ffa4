use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        request: &SpeechRequest,
    ) -> Result<SynthesizedAudio, SpeechSynthesisError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    pub text: String,
    pub voice_id: String,
    pub voice: VoiceSettings,
}

/// Serialized as the `voice_settings` object of a synthesis request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: f32,
    pub use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.5,
            style: 0.8,
            use_speaker_boost: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedAudio {
    pub data: Bytes,
    pub content_type: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechSynthesisError {
    #[error("{0}")]
    ApiRequestFailed(String),
}
