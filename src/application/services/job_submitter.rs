use std::sync::Arc;

use crate::application::ports::{RemoteCallError, TranscriptionService};
use crate::domain::{JobId, JobOptions, UploadHandle};

pub struct JobSubmitter {
    service: Arc<dyn TranscriptionService>,
}

impl JobSubmitter {
    pub fn new(service: Arc<dyn TranscriptionService>) -> Self {
        Self { service }
    }

    #[tracing::instrument(skip(self, options), fields(handle = %handle))]
    pub async fn submit(
        &self,
        handle: &UploadHandle,
        options: &JobOptions,
    ) -> Result<JobId, SubmitError> {
        let job_id = self.service.create_job(handle, options).await?;

        if job_id.as_str().trim().is_empty() {
            return Err(SubmitError(RemoteCallError::InvalidResponse(
                "empty job id".to_string(),
            )));
        }

        tracing::info!(job_id = %job_id, "Transcription job created");

        Ok(job_id)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("transcription job creation failed: {0}")]
pub struct SubmitError(#[from] pub RemoteCallError);
