use serde_json::Value;

use super::JobStatus;

/// One observation of a remote job, as returned by a status check.
#[derive(Debug, Clone, PartialEq)]
pub struct JobSnapshot {
    pub status: JobStatus,
    pub error: Option<String>,
    pub payload: Value,
}

impl JobSnapshot {
    pub fn new(status: JobStatus, error: Option<String>, payload: Value) -> Self {
        Self {
            status,
            error,
            payload,
        }
    }
}
