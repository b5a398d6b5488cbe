use futures::Stream;
use tokio::sync::mpsc::{self, error::TryRecvError};
use tokio::task::JoinHandle;

use super::{ProgressEvent, SimulatedProgress, TaskKind, TickPlan};

/// Handle to a running task.
///
/// Events can be read without blocking ([`poll`](Self::poll), for a UI tick) or
/// awaited ([`next`](Self::next) / [`observe`](Self::observe)). The stream ends
/// after the first terminal event. Dropping the handle aborts the timer task.
#[derive(Debug)]
pub struct TaskHandle {
    kind: TaskKind,
    events: mpsc::UnboundedReceiver<ProgressEvent>,
    task: JoinHandle<()>,
    cancelled: bool,
    finished: bool,
}

impl TaskHandle {
    /// Wraps an already spawned task and its event channel.
    #[must_use]
    pub fn from_parts(
        kind: TaskKind,
        events: mpsc::UnboundedReceiver<ProgressEvent>,
        task: JoinHandle<()>,
    ) -> Self {
        Self {
            kind,
            events,
            task,
            cancelled: false,
            finished: false,
        }
    }

    /// Spawns the timer loop for `kind` on the current tokio runtime.
    ///
    /// Must be called from within a runtime context.
    #[must_use]
    pub fn spawn_simulated(kind: TaskKind, progress: SimulatedProgress) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(drive(kind, kind.plan(), progress, tx));
        Self::from_parts(kind, rx, task)
    }

    #[must_use]
    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    /// True once a terminal event has been handed out.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn finish(&mut self, event: ProgressEvent) -> Option<ProgressEvent> {
        if event.is_terminal() {
            self.finished = true;
            self.task.abort();
        }
        Some(event)
    }

    /// Next buffered event, without waiting.
    pub fn poll(&mut self) -> Option<ProgressEvent> {
        if self.finished {
            return None;
        }
        if self.cancelled {
            return self.finish(ProgressEvent::Cancelled);
        }
        match self.events.try_recv() {
            Ok(event) => self.finish(event),
            Err(TryRecvError::Empty) => None,
            // the task ended without a terminal event
            Err(TryRecvError::Disconnected) => self.finish(ProgressEvent::Cancelled),
        }
    }

    /// Every event buffered right now, in order.
    pub fn drain(&mut self) -> Vec<ProgressEvent> {
        std::iter::from_fn(|| self.poll()).collect()
    }

    /// Waits for the next event. `None` once the task has finished.
    pub async fn next(&mut self) -> Option<ProgressEvent> {
        if self.finished {
            return None;
        }
        if self.cancelled {
            return self.finish(ProgressEvent::Cancelled);
        }
        match self.events.recv().await {
            Some(event) => self.finish(event),
            None => self.finish(ProgressEvent::Cancelled),
        }
    }

    /// Events as an async stream, ending after the terminal one.
    pub fn observe(&mut self) -> impl Stream<Item = ProgressEvent> + '_ {
        futures::stream::unfold(self, |handle| async move {
            let event = handle.next().await?;
            Some((event, handle))
        })
    }

    /// Stops the timer. The next read yields `Cancelled`.
    pub fn cancel(&mut self) {
        if self.finished || self.cancelled {
            return;
        }
        self.task.abort();
        self.cancelled = true;
        log::info!("{} task cancelled", self.kind.label());
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn drive(
    kind: TaskKind,
    plan: TickPlan,
    mut progress: SimulatedProgress,
    tx: mpsc::UnboundedSender<ProgressEvent>,
) {
    if plan.step == 0 {
        let _ = tx.send(ProgressEvent::Failed("Progress step must be positive".to_string()));
        return;
    }
    log::info!("{} task started", kind.label());

    loop {
        tokio::time::sleep(plan.interval).await;
        let event = progress.tick();
        if let ProgressEvent::Failed(reason) = &event {
            log::warn!("{} task failed: {reason}", kind.label());
            let _ = tx.send(event);
            return;
        }
        if tx.send(event).is_err() {
            // receiver gone, nobody is watching
            return;
        }
        if progress.is_finished() {
            break;
        }
    }

    tokio::time::sleep(plan.settle).await;
    log::info!("{} task completed", kind.label());
    let _ = tx.send(ProgressEvent::Completed);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use futures::StreamExt;
    use tokio::time::Instant;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn backup_emits_ten_steps_then_completes() {
        let started = Instant::now();
        let mut handle = TaskHandle::spawn_simulated(
            TaskKind::Backup,
            SimulatedProgress::new(TaskKind::Backup.plan().step),
        );

        let events: Vec<_> = handle.observe().collect().await;
        let mut expected: Vec<_> = (1..=10).map(|i| ProgressEvent::Progress(i * 10)).collect();
        expected.push(ProgressEvent::Completed);

        assert_eq!(events, expected);
        // 10 ticks of 500 ms plus the 500 ms settle delay
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(5500));
        assert!(elapsed < Duration::from_millis(5600));
        assert!(handle.is_finished());
        assert_eq!(handle.next().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn poll_sees_only_elapsed_ticks() {
        let mut handle = TaskHandle::spawn_simulated(
            TaskKind::Restore,
            SimulatedProgress::new(TaskKind::Restore.plan().step),
        );
        assert_eq!(handle.poll(), None);

        tokio::time::sleep(Duration::from_millis(950)).await;
        assert_eq!(
            handle.drain(),
            vec![
                ProgressEvent::Progress(5),
                ProgressEvent::Progress(10),
                ProgressEvent::Progress(15),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_ends_stream() {
        let mut handle = TaskHandle::spawn_simulated(TaskKind::Backup, SimulatedProgress::new(10));
        assert_eq!(handle.next().await, Some(ProgressEvent::Progress(10)));

        handle.cancel();
        assert_eq!(handle.next().await, Some(ProgressEvent::Cancelled));
        assert_eq!(handle.poll(), None);

        // no further ticks arrive once the timer is stopped
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(handle.drain().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn injected_failure_is_terminal() {
        let mut handle = TaskHandle::spawn_simulated(
            TaskKind::Backup,
            SimulatedProgress::new(10).failing_at(50),
        );
        let events: Vec<_> = handle.observe().collect().await;
        assert_eq!(events.len(), 5);
        assert!(matches!(events.last(), Some(ProgressEvent::Failed(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_handle_stops_timer() {
        let (_tx, rx) = mpsc::unbounded_channel::<ProgressEvent>();
        let (alive_tx, alive_rx) = tokio::sync::oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            let _alive = alive_tx;
            tokio::time::sleep(Duration::from_secs(3600)).await;
        });
        let handle = TaskHandle::from_parts(TaskKind::Backup, rx, task);
        drop(handle);

        // an aborted task drops its sender long before the hour is up
        let outcome = tokio::time::timeout(Duration::from_secs(1), alive_rx).await;
        assert!(matches!(outcome, Ok(Err(_))));
    }
}
