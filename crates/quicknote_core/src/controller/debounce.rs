//! Cancellable single-slot scheduled task.
//!
//! The host drives time: callers pass a monotonic `Instant` to `schedule`
//! and `take_due`, so no timer thread is involved.

use std::time::{Duration, Instant};

/// A task that fires once after a quiet window.
///
/// Scheduling while a run is pending replaces the pending deadline.
#[derive(Debug, Clone)]
pub struct DebouncedTask {
    delay: Duration,
    due_at: Option<Instant>,
}

impl DebouncedTask {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            due_at: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancels any pending run and schedules a new one at `now + delay`.
    pub fn schedule(&mut self, now: Instant) {
        self.due_at = Some(now + self.delay);
    }

    /// Drops the pending run, if any.
    pub fn cancel(&mut self) {
        self.due_at = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due_at.is_some()
    }

    /// Returns `true` exactly once when the pending run is due at `now`,
    /// clearing it.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.due_at {
            Some(due_at) if now >= due_at => {
                self.due_at = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DebouncedTask;
    use std::time::{Duration, Instant};

    #[test]
    fn rescheduling_pushes_deadline_back() {
        let start = Instant::now();
        let mut task = DebouncedTask::new(Duration::from_millis(200));

        task.schedule(start);
        task.schedule(start + Duration::from_millis(150));

        assert!(!task.take_due(start + Duration::from_millis(250)));
        assert!(task.take_due(start + Duration::from_millis(350)));
        assert!(!task.take_due(start + Duration::from_millis(400)));
    }

    #[test]
    fn cancel_drops_pending_run() {
        let start = Instant::now();
        let mut task = DebouncedTask::new(Duration::from_millis(10));
        task.schedule(start);
        assert!(task.is_pending());

        task.cancel();
        assert!(!task.is_pending());
        assert!(!task.take_due(start + Duration::from_secs(1)));
    }
}
