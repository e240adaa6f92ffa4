use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use voxrelay::application::services::{SpeechService, TextAnalysisService, TranscriptionWorkflow};
use voxrelay::infrastructure::assemblyai::AssemblyAiClient;
use voxrelay::infrastructure::elevenlabs::ElevenLabsClient;
use voxrelay::infrastructure::llm::FireworksClient;
use voxrelay::infrastructure::observability::{TracingConfig, init_tracing};
use voxrelay::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::new(
        environment.as_str(),
        &settings.logging.level,
        settings.logging.json,
    ))?;

    if settings.assemblyai.api_key.is_empty() {
        tracing::warn!("ASSEMBLYAI_API_KEY is not set; transcription requests will fail upstream");
    }
    if settings.fireworks.api_key.is_none() {
        tracing::warn!("FIREWORKS_API_KEY is not set; topic and summary requests will fail");
    }

    let transcription_service = Arc::new(AssemblyAiClient::new(
        settings.assemblyai.api_key.clone(),
        Some(settings.assemblyai.base_url.clone()),
    ));
    let transcription = Arc::new(TranscriptionWorkflow::new(
        transcription_service,
        settings.transcription.to_config()?,
    ));

    let llm_client = Arc::new(FireworksClient::new(
        settings.fireworks.api_key.clone(),
        Some(settings.fireworks.base_url.clone()),
    ));
    let text_analysis = Arc::new(TextAnalysisService::new(
        llm_client,
        settings.fireworks.models(),
    ));

    let synthesizer = Arc::new(ElevenLabsClient::new(
        settings.elevenlabs.api_key.clone(),
        Some(settings.elevenlabs.base_url.clone()),
        Some(settings.elevenlabs.model_id.clone()),
    ));
    let speech = Arc::new(SpeechService::new(synthesizer));

    let state = AppState {
        transcription,
        text_analysis,
        speech,
        max_upload_bytes: settings.server.max_upload_bytes,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!(
        %addr,
        chunk_size_bytes = settings.transcription.chunk_size_bytes,
        poll_interval_ms = settings.transcription.poll_interval_ms,
        poll_deadline_ms = settings.transcription.poll_deadline_ms,
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
