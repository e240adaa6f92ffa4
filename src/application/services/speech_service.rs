use std::sync::Arc;

use crate::application::ports::{
    SpeechRequest, SpeechSynthesisError, SpeechSynthesizer, SynthesizedAudio, VoiceSettings,
};

#[derive(Debug, Clone, Default)]
pub struct SpeechInput {
    pub text: Option<String>,
    pub voice_id: Option<String>,
    pub stability: Option<f32>,
    pub similarity_boost: Option<f32>,
}

pub struct SpeechService {
    synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl SpeechService {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { synthesizer }
    }

    pub async fn generate(&self, input: SpeechInput) -> Result<SynthesizedAudio, SpeechError> {
        let (Some(text), Some(voice_id)) = (
            input.text.filter(|t| !t.is_empty()),
            input.voice_id.filter(|v| !v.is_empty()),
        ) else {
            return Err(SpeechError::MissingFields);
        };

        let defaults = VoiceSettings::default();
        let request = SpeechRequest {
            text,
            voice_id,
            voice: VoiceSettings {
                stability: input.stability.unwrap_or(defaults.stability),
                similarity_boost: input.similarity_boost.unwrap_or(defaults.similarity_boost),
                ..defaults
            },
        };

        let audio = self.synthesizer.synthesize(&request).await?;

        tracing::info!(
            voice_id = %request.voice_id,
            bytes = audio.data.len(),
            "Speech synthesized"
        );

        Ok(audio)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("Missing required fields: text and voiceId")]
    MissingFields,
    #[error(transparent)]
    Synthesis(#[from] SpeechSynthesisError),
}
