use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::{Value, json};

use voxrelay::application::ports::{
    CompletionRequest, LlmClient, LlmClientError, RemoteCallError, SpeechRequest,
    SpeechSynthesisError, SpeechSynthesizer, SynthesizedAudio, TranscriptionService,
};
use voxrelay::domain::{JobId, JobOptions, JobSnapshot, JobStatus, UploadHandle};

#[derive(Debug, Clone, PartialEq)]
pub enum RemoteCall {
    Upload { bytes: usize, first_byte: Option<u8> },
    CreateJob { handle: String, options: JobOptions },
    Fetch { job_id: String },
}

pub fn snapshot(status: &str) -> JobSnapshot {
    JobSnapshot::new(
        JobStatus::from_remote(status),
        None,
        json!({ "id": "job-1", "status": status }),
    )
}

pub fn snapshot_with_words(words: Value) -> JobSnapshot {
    JobSnapshot::new(
        JobStatus::Completed,
        None,
        json!({ "id": "job-1", "status": "completed", "text": "hello world", "words": words }),
    )
}

/// Scripted stand-in for the remote transcription service.
///
/// Each uploaded chunk gets its own handle (`upload-1`, `upload-2`, ...). Status
/// checks pop scripted responses; the last one repeats once the script runs out.
pub struct FakeTranscriptionService {
    calls: Mutex<Vec<RemoteCall>>,
    failing_chunk: Option<(usize, RemoteCallError)>,
    create_result: Result<String, RemoteCallError>,
    statuses: Mutex<VecDeque<Result<JobSnapshot, RemoteCallError>>>,
}

impl Default for FakeTranscriptionService {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeTranscriptionService {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failing_chunk: None,
            create_result: Ok("job-1".to_string()),
            statuses: Mutex::new(VecDeque::from([Ok(snapshot_with_words(json!([])))])),
        }
    }

    pub fn with_failing_chunk(mut self, chunk: usize, status: u16, body: &str) -> Self {
        self.failing_chunk = Some((
            chunk,
            RemoteCallError::Status {
                status,
                body: body.to_string(),
            },
        ));
        self
    }

    pub fn with_create_result(mut self, result: Result<String, RemoteCallError>) -> Self {
        self.create_result = result;
        self
    }

    pub fn with_statuses(self, statuses: Vec<Result<JobSnapshot, RemoteCallError>>) -> Self {
        *self.statuses.lock().unwrap() = statuses.into();
        self
    }

    pub fn calls(&self) -> Vec<RemoteCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn upload_sizes(&self) -> Vec<usize> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                RemoteCall::Upload { bytes, .. } => Some(bytes),
                _ => None,
            })
            .collect()
    }

    pub fn fetch_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, RemoteCall::Fetch { .. }))
            .count()
    }

    pub fn create_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, RemoteCall::CreateJob { .. }))
            .count()
    }

    fn record(&self, call: RemoteCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl TranscriptionService for FakeTranscriptionService {
    async fn upload_chunk(&self, chunk: Bytes) -> Result<UploadHandle, RemoteCallError> {
        self.record(RemoteCall::Upload {
            bytes: chunk.len(),
            first_byte: chunk.first().copied(),
        });
        let index = self
            .calls()
            .iter()
            .filter(|c| matches!(c, RemoteCall::Upload { .. }))
            .count();

        match &self.failing_chunk {
            Some((failing, error)) if *failing == index => Err(error.clone()),
            _ => Ok(UploadHandle::new(format!("upload-{}", index))),
        }
    }

    async fn create_job(
        &self,
        handle: &UploadHandle,
        options: &JobOptions,
    ) -> Result<JobId, RemoteCallError> {
        self.record(RemoteCall::CreateJob {
            handle: handle.as_str().to_string(),
            options: options.clone(),
        });
        self.create_result.clone().map(JobId::new)
    }

    async fn fetch_job(&self, id: &JobId) -> Result<JobSnapshot, RemoteCallError> {
        self.record(RemoteCall::Fetch {
            job_id: id.as_str().to_string(),
        });
        let mut statuses = self.statuses.lock().unwrap();
        if statuses.len() > 1 {
            statuses.pop_front().unwrap()
        } else {
            statuses.front().cloned().unwrap()
        }
    }
}

/// Returns a fixed answer, or fails when built with `not_configured`.
pub struct FakeLlmClient {
    answer: Option<String>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl FakeLlmClient {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: Some(answer.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn not_configured() -> Self {
        Self {
            answer: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for FakeLlmClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmClientError> {
        self.requests.lock().unwrap().push(request.clone());
        self.answer
            .clone()
            .ok_or(LlmClientError::NotConfigured("Fireworks"))
    }
}

pub struct FakeSpeechSynthesizer {
    fail_with: Option<String>,
    requests: Mutex<Vec<SpeechRequest>>,
}

impl FakeSpeechSynthesizer {
    pub fn new() -> Self {
        Self {
            fail_with: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<SpeechRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechSynthesizer for FakeSpeechSynthesizer {
    async fn synthesize(
        &self,
        request: &SpeechRequest,
    ) -> Result<SynthesizedAudio, SpeechSynthesisError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.fail_with {
            Some(message) => Err(SpeechSynthesisError::ApiRequestFailed(message.clone())),
            None => Ok(SynthesizedAudio {
                data: Bytes::from_static(b"ID3fake-mp3"),
                content_type: "audio/mpeg".to_string(),
            }),
        }
    }
}
