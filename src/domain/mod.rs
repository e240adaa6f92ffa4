mod audio_payload;
mod job;
mod job_id;
mod job_options;
mod job_status;
mod transcript;
mod upload_handle;

pub use audio_payload::AudioPayload;
pub use job::JobSnapshot;
pub use job_id::JobId;
pub use job_options::JobOptions;
pub use job_status::JobStatus;
pub use transcript::{TranscriptResult, TranscriptWord};
pub use upload_handle::UploadHandle;
