use std::num::NonZeroUsize;
use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::{
    PollPolicy, ProjectionMode, TextAnalysisModels, TranscriptionConfig,
};
use crate::domain::JobOptions;
use crate::infrastructure::{assemblyai, elevenlabs, llm};

use super::Environment;

const DEFAULT_CHUNK_SIZE_BYTES: i64 = 5 * 1024 * 1024;
const DEFAULT_POLL_INTERVAL_MS: i64 = 2_000;
const DEFAULT_POLL_DEADLINE_MS: i64 = 300_000;
const DEFAULT_MAX_UPLOAD_BYTES: i64 = 100 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub assemblyai: AssemblyAiSettings,
    pub transcription: TranscriptionSettings,
    pub elevenlabs: ElevenLabsSettings,
    pub fireworks: FireworksSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssemblyAiSettings {
    pub api_key: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub chunk_size_bytes: usize,
    pub poll_interval_ms: u64,
    pub poll_deadline_ms: u64,
    pub projection: ProjectionMode,
    pub punctuate: bool,
    pub format_text: bool,
    pub speaker_labels: bool,
    pub language_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ElevenLabsSettings {
    pub api_key: String,
    pub base_url: String,
    pub model_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FireworksSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub topic_model: String,
    pub summary_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Settings {
    /// Defaults, then `appsettings.{environment}.toml`, then `APP__SECTION__KEY`
    /// variables, then the well-known provider credential variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let builder = Self::defaults()?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("assemblyai.api_key", env_var("ASSEMBLYAI_API_KEY"))?
            .set_override_option("elevenlabs.api_key", env_var("ELEVENLABS_API_KEY"))?
            .set_override_option(
                "fireworks.api_key",
                env_var("FIREWORKS_API_KEY").or_else(|| env_var("DOBBY_API_KEY")),
            )?;

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Settings built from defaults only, without reading files or the environment.
    pub fn from_defaults() -> Result<Self, ConfigError> {
        let settings: Settings = Self::defaults()?.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.max_upload_bytes", DEFAULT_MAX_UPLOAD_BYTES)?
            .set_default("assemblyai.api_key", "")?
            .set_default("assemblyai.base_url", assemblyai::DEFAULT_BASE_URL)?
            .set_default("transcription.chunk_size_bytes", DEFAULT_CHUNK_SIZE_BYTES)?
            .set_default("transcription.poll_interval_ms", DEFAULT_POLL_INTERVAL_MS)?
            .set_default("transcription.poll_deadline_ms", DEFAULT_POLL_DEADLINE_MS)?
            .set_default("transcription.projection", "words")?
            .set_default("transcription.punctuate", true)?
            .set_default("transcription.format_text", true)?
            .set_default("transcription.speaker_labels", false)?
            .set_default("elevenlabs.api_key", "")?
            .set_default("elevenlabs.base_url", elevenlabs::DEFAULT_BASE_URL)?
            .set_default("elevenlabs.model_id", elevenlabs::DEFAULT_MODEL_ID)?
            .set_default("fireworks.base_url", llm::DEFAULT_BASE_URL)?
            .set_default(
                "fireworks.topic_model",
                "accounts/fireworks/models/llama-v3p1-8b-instruct",
            )?
            .set_default(
                "fireworks.summary_model",
                "accounts/sentientfoundation/models/dobby-unhinged-llama-3-3-70b-new",
            )?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.transcription;
        if t.chunk_size_bytes == 0 {
            return Err(invalid("transcription.chunk_size_bytes must be positive"));
        }
        if t.poll_interval_ms == 0 {
            return Err(invalid("transcription.poll_interval_ms must be positive"));
        }
        if t.poll_deadline_ms == 0 {
            return Err(invalid("transcription.poll_deadline_ms must be positive"));
        }
        if t.poll_interval_ms > t.poll_deadline_ms {
            return Err(invalid(
                "transcription.poll_interval_ms must not exceed poll_deadline_ms",
            ));
        }
        Ok(())
    }
}

impl TranscriptionSettings {
    pub fn to_config(&self) -> Result<TranscriptionConfig, ConfigError> {
        let chunk_size = NonZeroUsize::new(self.chunk_size_bytes)
            .ok_or_else(|| invalid("transcription.chunk_size_bytes must be positive"))?;

        Ok(TranscriptionConfig {
            chunk_size,
            poll_policy: PollPolicy {
                interval: Duration::from_millis(self.poll_interval_ms),
                deadline: Duration::from_millis(self.poll_deadline_ms),
            },
            options: JobOptions {
                punctuate: self.punctuate,
                format_text: self.format_text,
                speaker_labels: self.speaker_labels,
                language_code: self.language_code.clone(),
            },
            projection: self.projection,
        })
    }
}

impl FireworksSettings {
    pub fn models(&self) -> TextAnalysisModels {
        TextAnalysisModels {
            topic_model: self.topic_model.clone(),
            summary_model: self.summary_model.clone(),
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::Message(message.to_string())
}
