//! Task status and completion waiting.
//!
//! Writes are asynchronous on the service side: they return a task ID and
//! become visible once the task is `published`. [`Index::wait_task`] polls
//! the status with exponential backoff, starting at one second and doubling
//! up to a one-minute ceiling, bounded by a twenty-minute overall deadline.

use super::Index;
use crate::models::TaskStatusRes;
use crate::transport::{CallKind, RequestOptions};
use crate::{Error, Result};
use std::time::{Duration, Instant};

/// First delay between two status polls.
pub const WAIT_TASK_INITIAL_DELAY: Duration = Duration::from_secs(1);

/// Ceiling applied to the doubling poll delay.
pub const WAIT_TASK_MAX_DELAY: Duration = Duration::from_secs(60);

/// Overall deadline after which waiting gives up.
pub const WAIT_TASK_DEADLINE: Duration = Duration::from_secs(20 * 60);

/// Returns the delay to use after `delay`.
pub(crate) fn next_delay(delay: Duration) -> Duration {
    (delay * 2).min(WAIT_TASK_MAX_DELAY)
}

impl Index {
    /// Returns the status of the task identified by `task_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn get_task_status(
        &self,
        task_id: u64,
        opts: Option<&RequestOptions>,
    ) -> Result<TaskStatusRes> {
        let path = format!("{}/task/{task_id}", self.route());
        self.transport().get(&path, CallKind::Read, opts)
    }

    /// Blocks until the task identified by `task_id` is published.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TaskTimeout`] if the task is still pending after
    /// [`WAIT_TASK_DEADLINE`], or any status-poll error as-is.
    pub fn wait_task(&self, task_id: u64, opts: Option<&RequestOptions>) -> Result<()> {
        self.wait_task_with_deadline(task_id, WAIT_TASK_DEADLINE, opts)
    }

    /// Same as [`wait_task`](Self::wait_task) with an explicit deadline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TaskTimeout`] past the deadline, or any status-poll
    /// error as-is.
    pub fn wait_task_with_deadline(
        &self,
        task_id: u64,
        deadline: Duration,
        opts: Option<&RequestOptions>,
    ) -> Result<()> {
        let start = Instant::now();
        let mut delay = WAIT_TASK_INITIAL_DELAY;

        loop {
            if self.get_task_status(task_id, opts)?.is_published() {
                return Ok(());
            }
            if start.elapsed() + delay > deadline {
                return Err(Error::TaskTimeout {
                    task_id,
                    waited: start.elapsed(),
                });
            }
            std::thread::sleep(delay);
            delay = next_delay(delay);
        }
    }
}
