use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::{self, Instant};

use crate::application::ports::{RemoteCallError, TranscriptionService};
use crate::domain::{JobId, JobSnapshot, JobStatus};

/// How often to check on a job and how long to keep trying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub deadline: Duration,
}

/// Checks a remote job at a fixed interval until it reaches a terminal state
/// or the deadline passes.
pub struct PollingLoop {
    service: Arc<dyn TranscriptionService>,
    policy: PollPolicy,
}

impl PollingLoop {
    pub fn new(service: Arc<dyn TranscriptionService>, policy: PollPolicy) -> Self {
        Self { service, policy }
    }

    pub fn policy(&self) -> PollPolicy {
        self.policy
    }

    #[tracing::instrument(skip(self), fields(job_id = %id))]
    pub async fn poll(&self, id: &JobId) -> Result<JobSnapshot, PollError> {
        run_until_terminal(self.policy, || self.service.fetch_job(id)).await
    }
}

/// Drives `fetch` until it reports a terminal status.
///
/// Each call to `fetch` is one tick. No call is started once the deadline has
/// been reached, and a call in flight is abandoned when the deadline passes.
pub async fn run_until_terminal<F, Fut>(
    policy: PollPolicy,
    mut fetch: F,
) -> Result<JobSnapshot, PollError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<JobSnapshot, RemoteCallError>>,
{
    let started = Instant::now();
    let mut ticks: u32 = 0;

    loop {
        let remaining = time_left(policy.deadline, started)
            .ok_or_else(|| timed_out(started, ticks))?;

        ticks += 1;
        let snapshot = match time::timeout(remaining, fetch()).await {
            Ok(result) => result.map_err(PollError::Remote)?,
            Err(_) => return Err(timed_out(started, ticks)),
        };

        tracing::debug!(tick = ticks, status = %snapshot.status, "Polled job status");

        match snapshot.status {
            JobStatus::Completed => {
                tracing::info!(
                    ticks,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Job completed"
                );
                return Ok(snapshot);
            }
            JobStatus::Error => {
                let message = snapshot
                    .error
                    .unwrap_or_else(|| "unknown error".to_string());
                tracing::warn!(ticks, error = %message, "Job failed remotely");
                return Err(PollError::JobFailed { message });
            }
            JobStatus::Queued | JobStatus::Processing => {}
        }

        let remaining = time_left(policy.deadline, started)
            .ok_or_else(|| timed_out(started, ticks))?;
        time::sleep(policy.interval.min(remaining)).await;
    }
}

fn time_left(deadline: Duration, started: Instant) -> Option<Duration> {
    deadline
        .checked_sub(started.elapsed())
        .filter(|left| !left.is_zero())
}

fn timed_out(started: Instant, ticks: u32) -> PollError {
    let elapsed = started.elapsed();
    tracing::warn!(ticks, elapsed_ms = elapsed.as_millis() as u64, "Polling deadline reached");
    PollError::TimedOut { elapsed, ticks }
}

#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error("transcription polling failed: {0}")]
    Remote(RemoteCallError),
    #[error("transcription job failed: {message}")]
    JobFailed { message: String },
    #[error("transcription timed out after {elapsed:?} ({ticks} status checks)")]
    TimedOut { elapsed: Duration, ticks: u32 },
}
