mod llm_client;
mod speech_synthesizer;
mod transcription_service;

pub use llm_client::{CompletionRequest, LlmClient, LlmClientError};
pub use speech_synthesizer::{
    SpeechRequest, SpeechSynthesisError, SpeechSynthesizer, SynthesizedAudio, VoiceSettings,
};
pub use transcription_service::{RemoteCallError, TranscriptionService};
