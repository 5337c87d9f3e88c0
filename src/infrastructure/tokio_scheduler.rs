// SPDX-License-Identifier: MPL-2.0
//! Tokio-backed scheduler adapter.
//!
//! [`TokioScheduler`] arms one-shot [`tokio::time::sleep`] tasks and keeps
//! their abort handles so pending callbacks can be cancelled. It must be
//! used from within a tokio runtime context.

use crate::application::port::{Scheduler, TickCallback, TimerHandle};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::AbortHandle;

/// Scheduler that spawns an abortable tokio task per scheduled callback.
///
/// Entries for fired callbacks are removed by the task itself, so the
/// internal table only ever holds in-flight timers. Cancelling a stale
/// handle finds no entry and is a no-op, per the port contract.
pub struct TokioScheduler {
    tasks: Arc<Mutex<HashMap<u64, AbortHandle>>>,
    next_id: AtomicU64,
}

impl TokioScheduler {
    /// Creates a scheduler with no pending timers.
    ///
    /// Callers must ensure a tokio runtime is current when invoking
    /// [`Scheduler::schedule`], since the adapter spawns tasks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(Mutex::new(HashMap::new())),
            next_id: AtomicU64::new(0),
        }
    }

    /// Returns the number of timers still in flight.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.lock().map(|tasks| tasks.len()).unwrap_or(0)
    }
}

impl Default for TokioScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, callback: TickCallback) -> TimerHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let tasks = Arc::clone(&self.tasks);

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Drop our own entry before running: the callback may cancel
            // or reschedule through the same scheduler.
            if let Ok(mut tasks) = tasks.lock() {
                tasks.remove(&id);
            }
            callback();
        });

        if let Ok(mut tasks) = self.tasks.lock() {
            tasks.insert(id, task.abort_handle());
        }
        TimerHandle::from_raw(id)
    }

    fn cancel(&self, handle: TimerHandle) {
        if let Ok(mut tasks) = self.tasks.lock() {
            if let Some(task) = tasks.remove(&handle.raw()) {
                task.abort();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counter_callback(counter: &Arc<AtomicUsize>) -> TickCallback {
        let counter = Arc::clone(counter);
        Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test]
    async fn scheduled_callback_fires_after_delay() {
        let scheduler = TokioScheduler::new();
        let fired = Arc::new(AtomicUsize::new(0));

        scheduler.schedule(Duration::from_millis(20), counter_callback(&fired));
        assert_eq!(scheduler.pending(), 1);

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[tokio::test]
    async fn cancel_prevents_callback() {
        let scheduler = TokioScheduler::new();
        let fired = Arc::new(AtomicUsize::new(0));

        let handle = scheduler.schedule(Duration::from_millis(30), counter_callback(&fired));
        scheduler.cancel(handle);

        tokio::time::sleep(Duration::from_millis(90)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert_eq!(scheduler.pending(), 0);
    }

    #[tokio::test]
    async fn cancel_of_stale_handle_is_noop() {
        let scheduler = TokioScheduler::new();
        let fired = Arc::new(AtomicUsize::new(0));

        let handle = scheduler.schedule(Duration::from_millis(10), counter_callback(&fired));
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        scheduler.cancel(handle);
        scheduler.cancel(TimerHandle::from_raw(12345));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn independent_timers_do_not_interfere() {
        let scheduler = TokioScheduler::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let first_handle = scheduler.schedule(Duration::from_millis(20), counter_callback(&first));
        scheduler.schedule(Duration::from_millis(20), counter_callback(&second));
        scheduler.cancel(first_handle);

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }
}
