mod elevenlabs_client;

pub use elevenlabs_client::{DEFAULT_BASE_URL, DEFAULT_MODEL_ID, ElevenLabsClient};
