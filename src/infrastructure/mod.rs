pub mod assemblyai;
pub mod elevenlabs;
pub mod llm;
pub mod observability;
