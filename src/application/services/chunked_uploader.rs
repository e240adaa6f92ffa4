use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::application::ports::{RemoteCallError, TranscriptionService};
use crate::domain::{AudioPayload, UploadHandle};

/// Sends a payload to the remote upload endpoint as a sequence of fixed-size chunks.
pub struct ChunkedUploader {
    service: Arc<dyn TranscriptionService>,
    chunk_size: NonZeroUsize,
}

impl ChunkedUploader {
    pub fn new(service: Arc<dyn TranscriptionService>, chunk_size: NonZeroUsize) -> Self {
        Self {
            service,
            chunk_size,
        }
    }

    pub fn chunk_size(&self) -> NonZeroUsize {
        self.chunk_size
    }

    /// Uploads every chunk in order, stopping at the first failure.
    ///
    /// The handle returned for the last chunk is the one that identifies the whole payload.
    #[tracing::instrument(skip(self, payload), fields(bytes = payload.len(), chunk_size = self.chunk_size.get()))]
    pub async fn upload(&self, payload: &AudioPayload) -> Result<UploadHandle, UploadError> {
        let chunks = payload.chunks(self.chunk_size.get());
        let chunk_count = chunks.len();
        let mut handle = None;

        for (index, chunk) in chunks.enumerate() {
            tracing::debug!(
                chunk = index + 1,
                chunk_count,
                bytes = chunk.len(),
                "Uploading audio chunk"
            );

            let uploaded = self
                .service
                .upload_chunk(chunk)
                .await
                .map_err(|source| UploadError::ChunkFailed {
                    chunk: index + 1,
                    chunk_count,
                    source,
                })?;
            handle = Some(uploaded);
        }

        let handle = handle.ok_or(UploadError::EmptyPayload)?;

        tracing::info!(chunk_count, handle = %handle, "Audio upload completed");

        Ok(handle)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("nothing to upload")]
    EmptyPayload,
    #[error("upload of chunk {chunk}/{chunk_count} failed: {source}")]
    ChunkFailed {
        chunk: usize,
        chunk_count: usize,
        source: RemoteCallError,
    },
}
