use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{JobId, JobOptions, JobSnapshot, UploadHandle};

/// Remote asynchronous transcription service: upload, create a job, check on it.
#[async_trait]
pub trait TranscriptionService: Send + Sync {
    async fn upload_chunk(&self, chunk: Bytes) -> Result<UploadHandle, RemoteCallError>;

    async fn create_job(
        &self,
        handle: &UploadHandle,
        options: &JobOptions,
    ) -> Result<JobId, RemoteCallError>;

    async fn fetch_job(&self, id: &JobId) -> Result<JobSnapshot, RemoteCallError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteCallError {
    #[error("status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("request: {0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
