mod chunked_uploader;
mod job_submitter;
mod polling_loop;
mod result_projector;
mod speech_service;
mod text_analysis_service;
mod transcription_workflow;

pub use chunked_uploader::{ChunkedUploader, UploadError};
pub use job_submitter::{JobSubmitter, SubmitError};
pub use polling_loop::{PollError, PollPolicy, PollingLoop, run_until_terminal};
pub use result_projector::{ProjectionMode, ResultProjector};
pub use speech_service::{SpeechError, SpeechInput, SpeechService};
pub use text_analysis_service::{
    SUMMARY_MAX_INPUT_CHARS, TOPIC_MAX_INPUT_CHARS, TextAnalysisError, TextAnalysisModels,
    TextAnalysisService, truncate_chars,
};
pub use transcription_workflow::{TranscriptionConfig, TranscriptionError, TranscriptionWorkflow};
