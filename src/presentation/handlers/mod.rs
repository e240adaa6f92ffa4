mod error_response;
mod health;
mod speech;
mod text_analysis;
mod transcribe;

pub use error_response::{ErrorResponse, error_response};
pub use health::health_handler;
pub use speech::{GenerateSpeechRequest, generate_speech_handler};
pub use text_analysis::{TextRequest, get_topic_handler, summarize_handler};
pub use transcribe::{AUDIO_FIELD, transcribe_handler};
