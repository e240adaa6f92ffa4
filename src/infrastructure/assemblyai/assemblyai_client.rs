use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::ports::{RemoteCallError, TranscriptionService};
use crate::domain::{JobId, JobOptions, JobSnapshot, JobStatus, UploadHandle};

pub const DEFAULT_BASE_URL: &str = "https://api.assemblyai.com";

pub struct AssemblyAiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AssemblyAiClient {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_key,
        }
    }
}

#[derive(Deserialize)]
struct UploadResponse {
    upload_url: Option<String>,
}

#[derive(Serialize)]
struct CreateTranscriptRequest<'a> {
    audio_url: &'a str,
    #[serde(flatten)]
    options: &'a JobOptions,
}

#[derive(Deserialize)]
struct CreateTranscriptResponse {
    id: Option<String>,
}

#[async_trait]
impl TranscriptionService for AssemblyAiClient {
    async fn upload_chunk(&self, chunk: Bytes) -> Result<UploadHandle, RemoteCallError> {
        let url = format!("{}/v2/upload", self.base_url);

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, &self.api_key)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(chunk)
            .send()
            .await
            .map_err(|e| RemoteCallError::Transport(e.to_string()))?;

        let body: UploadResponse = read_json(response).await?;
        body.upload_url
            .map(UploadHandle::new)
            .ok_or_else(|| RemoteCallError::InvalidResponse("missing upload_url".to_string()))
    }

    async fn create_job(
        &self,
        handle: &UploadHandle,
        options: &JobOptions,
    ) -> Result<JobId, RemoteCallError> {
        let url = format!("{}/v2/transcript", self.base_url);

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, &self.api_key)
            .json(&CreateTranscriptRequest {
                audio_url: handle.as_str(),
                options,
            })
            .send()
            .await
            .map_err(|e| RemoteCallError::Transport(e.to_string()))?;

        let body: CreateTranscriptResponse = read_json(response).await?;
        body.id
            .map(JobId::new)
            .ok_or_else(|| RemoteCallError::InvalidResponse("missing id".to_string()))
    }

    async fn fetch_job(&self, id: &JobId) -> Result<JobSnapshot, RemoteCallError> {
        let url = format!("{}/v2/transcript/{}", self.base_url, id);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, &self.api_key)
            .send()
            .await
            .map_err(|e| RemoteCallError::Transport(e.to_string()))?;

        let payload: Value = read_json(response).await?;
        let status = payload
            .get("status")
            .and_then(Value::as_str)
            .map(JobStatus::from_remote)
            .ok_or_else(|| RemoteCallError::InvalidResponse("missing status".to_string()))?;
        let error = payload
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(JobSnapshot::new(status, error, payload))
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, RemoteCallError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        return Err(RemoteCallError::Status {
            status: status.as_u16(),
            body,
        });
    }

    response
        .json()
        .await
        .map_err(|e| RemoteCallError::InvalidResponse(e.to_string()))
}
