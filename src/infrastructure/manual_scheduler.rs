// SPDX-License-Identifier: MPL-2.0
//! Deterministic virtual-time scheduler.
//!
//! [`ManualScheduler`] never consults a wall clock. Callbacks fire only
//! when the caller advances virtual time explicitly, which makes countdown
//! behavior fully reproducible in tests and usable from single-threaded
//! embedders that pump their own event loop.

use crate::application::port::{Scheduler, TickCallback, TimerHandle};
use std::sync::Mutex;
use std::time::Duration;

struct Entry {
    handle: TimerHandle,
    due: Duration,
    callback: TickCallback,
}

struct Queue {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry>,
}

/// Scheduler driven by explicit [`advance`](ManualScheduler::advance) calls.
///
/// Virtual time starts at zero and only moves when advanced. Callbacks
/// that become due during an advance run in due order, and a callback may
/// schedule further callbacks that fire within the same advance if their
/// delay also elapses before the target time.
///
/// # Example
///
/// ```
/// use line_lens::application::port::Scheduler;
/// use line_lens::infrastructure::ManualScheduler;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let scheduler = ManualScheduler::new();
/// let fired = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&fired);
///
/// scheduler.schedule(
///     Duration::from_secs(1),
///     Box::new(move || flag.store(true, Ordering::SeqCst)),
/// );
///
/// scheduler.advance(Duration::from_millis(999));
/// assert!(!fired.load(Ordering::SeqCst));
///
/// scheduler.advance(Duration::from_millis(1));
/// assert!(fired.load(Ordering::SeqCst));
/// ```
pub struct ManualScheduler {
    queue: Mutex<Queue>,
}

impl ManualScheduler {
    /// Creates a scheduler with virtual time at zero and nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: Mutex::new(Queue {
                now: Duration::ZERO,
                next_id: 0,
                entries: Vec::new(),
            }),
        }
    }

    /// Advances virtual time by `step`, firing every callback that comes
    /// due on the way.
    ///
    /// Callbacks run outside the internal lock, so a firing callback may
    /// call [`schedule`](Scheduler::schedule) or
    /// [`cancel`](Scheduler::cancel) on this scheduler without deadlock.
    pub fn advance(&self, step: Duration) {
        let target = {
            let queue = self.queue.lock().expect("scheduler lock poisoned");
            queue.now + step
        };

        loop {
            let next = {
                let mut queue = self.queue.lock().expect("scheduler lock poisoned");
                let due_index = queue
                    .entries
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, entry)| entry.due)
                    .filter(|(_, entry)| entry.due <= target)
                    .map(|(index, _)| index);

                match due_index {
                    Some(index) => {
                        let entry = queue.entries.remove(index);
                        queue.now = entry.due;
                        Some(entry)
                    }
                    None => {
                        queue.now = target;
                        None
                    }
                }
            };

            match next {
                Some(entry) => (entry.callback)(),
                None => break,
            }
        }
    }

    /// Returns the current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.queue.lock().expect("scheduler lock poisoned").now
    }

    /// Returns the number of callbacks waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue
            .lock()
            .expect("scheduler lock poisoned")
            .entries
            .len()
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, callback: TickCallback) -> TimerHandle {
        let mut queue = self.queue.lock().expect("scheduler lock poisoned");
        let handle = TimerHandle::from_raw(queue.next_id);
        queue.next_id += 1;
        let due = queue.now + delay;
        queue.entries.push(Entry {
            handle,
            due,
            callback,
        });
        handle
    }

    fn cancel(&self, handle: TimerHandle) {
        let mut queue = self.queue.lock().expect("scheduler lock poisoned");
        queue.entries.retain(|entry| entry.handle != handle);
    }
}
