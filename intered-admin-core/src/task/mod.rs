//! Simulated long-running operations (backup / restore).
//!
//! A task is a timer loop advancing a [`SimulatedProgress`]. The UI holds a
//! [`TaskHandle`] and renders whatever [`ProgressEvent`]s it receives.

mod handle;

pub use handle::TaskHandle;

use std::time::Duration;

use serde::Serialize;

/// Kind of long-running operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TaskKind {
    Backup,
    Restore,
}

impl TaskKind {
    #[must_use]
    pub fn plan(self) -> TickPlan {
        match self {
            Self::Backup => TickPlan {
                step: 10,
                interval: Duration::from_millis(500),
                settle: Duration::from_millis(500),
            },
            Self::Restore => TickPlan {
                step: 5,
                interval: Duration::from_millis(300),
                settle: Duration::from_millis(500),
            },
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Backup => "Backup",
            Self::Restore => "Restore",
        }
    }
}

/// Timer parameters of a simulated task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickPlan {
    /// Percentage added per tick
    pub step: u8,
    /// Delay between ticks
    pub interval: Duration,
    /// Delay between reaching 100 and reporting completion
    pub settle: Duration,
}

impl TickPlan {
    /// Ticks needed to go from 0 to 100.
    #[must_use]
    pub fn ticks(&self) -> u32 {
        if self.step == 0 {
            return 0;
        }
        u32::from(100u8.div_ceil(self.step))
    }
}

/// Something that happened to a running task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ProgressEvent {
    /// New percentage, `0..=100`
    Progress(u8),
    Completed,
    Failed(String),
    Cancelled,
}

impl ProgressEvent {
    /// Completed, failed and cancelled end the stream.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Progress(_))
    }
}

/// Pure progress counter advanced by ticks.
#[derive(Debug, Clone)]
pub struct SimulatedProgress {
    value: u8,
    step: u8,
    /// Fails once the value reaches this percentage
    fail_at: Option<u8>,
    failed: bool,
}

impl SimulatedProgress {
    #[must_use]
    pub fn new(step: u8) -> Self {
        Self {
            value: 0,
            step,
            fail_at: None,
            failed: false,
        }
    }

    #[must_use]
    pub fn failing_at(mut self, percent: u8) -> Self {
        self.fail_at = Some(percent);
        self
    }

    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.failed || self.value >= 100
    }

    /// Advances one step, clamped at 100.
    ///
    /// Yields `Failed` instead of progress when the injected failure point is
    /// reached; after that the counter no longer moves.
    pub fn tick(&mut self) -> ProgressEvent {
        if self.failed {
            return ProgressEvent::Failed(self.failure_message());
        }
        let next = self.value.saturating_add(self.step).min(100);
        if self.fail_at.is_some_and(|at| next >= at) {
            self.failed = true;
            return ProgressEvent::Failed(self.failure_message());
        }
        self.value = next;
        ProgressEvent::Progress(self.value)
    }

    fn failure_message(&self) -> String {
        format!("Operation aborted at {}%", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backup_reaches_100_in_ten_steps() {
        let plan = TaskKind::Backup.plan();
        assert_eq!(plan.ticks(), 10);

        let mut progress = SimulatedProgress::new(plan.step);
        let values: Vec<_> = (0..plan.ticks()).map(|_| progress.tick()).collect();
        let expected: Vec<_> = (1..=10).map(|i| ProgressEvent::Progress(i * 10)).collect();
        assert_eq!(values, expected);
        assert!(progress.is_finished());
    }

    #[test]
    fn restore_plan() {
        let plan = TaskKind::Restore.plan();
        assert_eq!(plan.step, 5);
        assert_eq!(plan.interval, Duration::from_millis(300));
        assert_eq!(plan.ticks(), 20);
    }

    #[test]
    fn clamps_at_100() {
        let mut progress = SimulatedProgress::new(30);
        for _ in 0..5 {
            progress.tick();
        }
        assert_eq!(progress.value(), 100);
        assert_eq!(progress.tick(), ProgressEvent::Progress(100));
    }

    #[test]
    fn injected_failure_stops_counter() {
        let mut progress = SimulatedProgress::new(10).failing_at(35);
        assert_eq!(progress.tick(), ProgressEvent::Progress(10));
        assert_eq!(progress.tick(), ProgressEvent::Progress(20));
        assert_eq!(progress.tick(), ProgressEvent::Progress(30));
        assert!(matches!(progress.tick(), ProgressEvent::Failed(_)));
        assert!(progress.is_finished());
        assert_eq!(progress.value(), 30);
        assert!(progress.tick().is_terminal());
    }
}
