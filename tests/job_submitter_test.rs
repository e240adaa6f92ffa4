mod helpers;

use std::sync::Arc;

use voxrelay::application::ports::RemoteCallError;
use voxrelay::application::services::{JobSubmitter, SubmitError};
use voxrelay::domain::{JobOptions, UploadHandle};

use helpers::{FakeTranscriptionService, RemoteCall};

#[tokio::test]
async fn given_upload_handle_when_submitting_then_returns_job_id_and_sends_options() {
    let service = Arc::new(FakeTranscriptionService::new());
    let submitter = JobSubmitter::new(service.clone());
    let options = JobOptions {
        speaker_labels: true,
        ..JobOptions::default()
    };

    let job_id = submitter
        .submit(&UploadHandle::new("upload-1"), &options)
        .await
        .unwrap();

    assert_eq!(job_id.as_str(), "job-1");
    assert_eq!(
        service.calls(),
        vec![RemoteCall::CreateJob {
            handle: "upload-1".to_string(),
            options,
        }]
    );
}

#[tokio::test]
async fn given_remote_rejects_job_when_submitting_then_returns_submit_error_with_status() {
    let service = Arc::new(FakeTranscriptionService::new().with_create_result(Err(
        RemoteCallError::Status {
            status: 401,
            body: "Invalid API key".to_string(),
        },
    )));
    let submitter = JobSubmitter::new(service.clone());

    let result = submitter
        .submit(&UploadHandle::new("upload-1"), &JobOptions::default())
        .await;

    let error = result.unwrap_err();
    assert!(matches!(error, SubmitError(RemoteCallError::Status { status: 401, .. })));
    assert!(error.to_string().contains("Invalid API key"));
    assert_eq!(service.create_count(), 1);
}

#[tokio::test]
async fn given_blank_job_id_when_submitting_then_fails_as_invalid_response() {
    let service = Arc::new(FakeTranscriptionService::new().with_create_result(Ok("  ".to_string())));
    let submitter = JobSubmitter::new(service);

    let result = submitter
        .submit(&UploadHandle::new("upload-1"), &JobOptions::default())
        .await;

    assert!(matches!(
        result,
        Err(SubmitError(RemoteCallError::InvalidResponse(_)))
    ));
}
