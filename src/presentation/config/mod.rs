mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    AssemblyAiSettings, ElevenLabsSettings, FireworksSettings, LoggingSettings, ServerSettings,
    Settings, TranscriptionSettings,
};
