use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::application::ports::TranscriptionService;
use crate::domain::{AudioPayload, JobOptions, TranscriptResult};

use super::chunked_uploader::{ChunkedUploader, UploadError};
use super::job_submitter::{JobSubmitter, SubmitError};
use super::polling_loop::{PollError, PollPolicy, PollingLoop};
use super::result_projector::{ProjectionMode, ResultProjector};

#[derive(Debug, Clone)]
pub struct TranscriptionConfig {
    pub chunk_size: NonZeroUsize,
    pub poll_policy: PollPolicy,
    pub options: JobOptions,
    pub projection: ProjectionMode,
}

/// Upload, submit, poll, project. Any failing stage ends the run.
pub struct TranscriptionWorkflow {
    uploader: ChunkedUploader,
    submitter: JobSubmitter,
    poller: PollingLoop,
    projector: ResultProjector,
    options: JobOptions,
}

impl TranscriptionWorkflow {
    pub fn new(service: Arc<dyn TranscriptionService>, config: TranscriptionConfig) -> Self {
        Self {
            uploader: ChunkedUploader::new(Arc::clone(&service), config.chunk_size),
            submitter: JobSubmitter::new(Arc::clone(&service)),
            poller: PollingLoop::new(service, config.poll_policy),
            projector: ResultProjector::new(config.projection),
            options: config.options,
        }
    }

    #[tracing::instrument(skip(self, payload), fields(bytes = payload.len(), media_type = ?payload.media_type()))]
    pub async fn transcribe(
        &self,
        payload: AudioPayload,
    ) -> Result<TranscriptResult, TranscriptionError> {
        if payload.is_empty() {
            return Err(TranscriptionError::EmptyPayload);
        }

        let handle = self.uploader.upload(&payload).await?;
        drop(payload);

        let job_id = self.submitter.submit(&handle, &self.options).await?;
        let snapshot = self.poller.poll(&job_id).await?;
        let result = self.projector.project(&snapshot.payload);

        tracing::info!(
            job_id = %job_id,
            words = result.words().len(),
            "Transcription finished"
        );

        Ok(result)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("No audio file provided")]
    EmptyPayload,
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error(transparent)]
    Submit(#[from] SubmitError),
    #[error(transparent)]
    Poll(#[from] PollError),
}

impl TranscriptionError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, TranscriptionError::EmptyPayload)
    }
}
