//! Bounded, cancellable polling of remote generation tasks.

use adreel_config::RemoteProviderConfig;
use adreel_core::PipelineMetrics;
use adreel_error::{
    AdreelError, AdreelResult, CancelledError, GenerationError, TimeoutError, TimeoutErrorKind,
};
use std::future::Future;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

/// State of a remote task as reported by one status check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStatus {
    /// Still queued or running; carries the provider's status label
    Pending(String),
    /// Finished; the clip can be downloaded from `video_url`
    Completed {
        /// Result media URL
        video_url: String,
    },
    /// Failed or cancelled on the provider side
    Failed {
        /// Provider failure payload, verbatim
        payload: String,
    },
}

/// Upper bounds on waiting for one remote task.
///
/// # Examples
///
/// ```
/// use adreel_models::PollPolicy;
/// use std::time::Duration;
///
/// let policy = PollPolicy::new(Duration::from_secs(3), 200, Duration::from_secs(600));
/// assert_eq!(policy.max_attempts, 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Delay between status checks
    pub interval: Duration,
    /// Maximum number of status checks
    pub max_attempts: usize,
    /// Wall-clock limit measured from the first check
    pub deadline: Duration,
}

impl PollPolicy {
    /// Create a policy.
    pub fn new(interval: Duration, max_attempts: usize, deadline: Duration) -> Self {
        Self {
            interval,
            max_attempts,
            deadline,
        }
    }
}

impl From<&RemoteProviderConfig> for PollPolicy {
    fn from(config: &RemoteProviderConfig) -> Self {
        Self::new(config.poll_interval(), config.max_attempts, config.deadline())
    }
}

/// Check a task's status until it reaches a terminal state.
///
/// The first check happens immediately, later ones `policy.interval` apart.
/// Each check is cut short when it would run past `policy.deadline`.
/// Returns the result URL on completion.
///
/// # Errors
///
/// - [`GenerationError`] when the provider reports failure or cancellation
/// - [`TimeoutError`] when attempts or the deadline run out first
/// - [`CancelledError`] when `cancel` fires
/// - any error returned by `check_status`
#[instrument(skip(policy, cancel, check_status), fields(attempts = policy.max_attempts))]
pub async fn poll_until_terminal<F, Fut>(
    provider: &str,
    task_id: &str,
    policy: &PollPolicy,
    cancel: &CancellationToken,
    mut check_status: F,
) -> AdreelResult<String>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = AdreelResult<TaskStatus>>,
{
    let started = Instant::now();
    let max_attempts = policy.max_attempts.max(1);
    let metrics = PipelineMetrics::get();
    let mut attempt = 0;

    loop {
        attempt += 1;
        metrics.record_poll(provider);

        let remaining = policy.deadline.saturating_sub(started.elapsed());
        let status = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                return Err(CancelledError::new(format!("polling {} task {}", provider, task_id)).into());
            }
            checked = tokio::time::timeout(remaining, check_status()) => match checked {
                Ok(status) => status?,
                Err(_) => return Err(deadline_exceeded(task_id, started.elapsed())),
            },
        };

        match status {
            TaskStatus::Completed { video_url } => {
                debug!(attempt, "Task completed");
                return Ok(video_url);
            }
            TaskStatus::Failed { payload } => {
                return Err(GenerationError::new(provider, task_id, payload).into());
            }
            TaskStatus::Pending(state) => debug!(attempt, state = %state, "Task pending"),
        }

        if attempt >= max_attempts {
            return Err(TimeoutError::new(TimeoutErrorKind::AttemptsExhausted {
                task_id: task_id.to_string(),
                attempts: attempt,
            })
            .into());
        }

        let elapsed = started.elapsed();
        if elapsed >= policy.deadline {
            return Err(deadline_exceeded(task_id, elapsed));
        }

        let pause = policy.interval.min(policy.deadline - elapsed);
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                return Err(CancelledError::new(format!("polling {} task {}", provider, task_id)).into());
            }
            _ = tokio::time::sleep(pause) => {}
        }
    }
}

fn deadline_exceeded(task_id: &str, elapsed: Duration) -> AdreelError {
    TimeoutError::new(TimeoutErrorKind::DeadlineExceeded {
        task_id: task_id.to_string(),
        elapsed_secs: elapsed.as_secs(),
    })
    .into()
}
