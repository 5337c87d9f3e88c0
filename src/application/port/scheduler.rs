// SPDX-License-Identifier: MPL-2.0
//! Scheduling port definition.
//!
//! This module defines the [`Scheduler`] trait, a pair of capabilities
//! ("run this after a delay" / "cancel that") that timed components are
//! built on. Injecting the scheduler keeps countdown logic deterministic
//! under test: the manual adapter advances virtual time explicitly, while
//! the tokio adapter arms real one-shot tasks.

use std::fmt;
use std::time::Duration;

/// Callback invoked when a scheduled delay elapses.
///
/// Callbacks are one-shot and must be `Send` because async adapters may
/// fire them from a runtime worker thread.
pub type TickCallback = Box<dyn FnOnce() + Send + 'static>;

/// Opaque reference to a scheduled-but-not-yet-fired callback.
///
/// Handles are minted by the scheduler that created them and are only
/// meaningful to that scheduler. Once the callback fires, the handle is
/// stale; passing a stale handle to [`Scheduler::cancel`] is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Creates a handle from a scheduler-assigned identifier.
    ///
    /// Only scheduler implementations should mint handles.
    #[must_use]
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier backing this handle.
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Port for one-shot delayed execution.
///
/// At most one callback per handle; callbacks fire exactly once unless
/// cancelled first.
///
/// # Contract
///
/// - `schedule` returns a handle that identifies the pending callback.
/// - `cancel` prevents the callback from firing if it has not fired yet.
///   Cancelling a handle that already fired, was already cancelled, or
///   was never issued must be a silent no-op. Callers rely on this to
///   tear down without tracking whether a tick is still in flight.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single scheduler can be
/// shared by components living on different threads.
pub trait Scheduler: Send + Sync {
    /// Schedules `callback` to run once after `delay`.
    fn schedule(&self, delay: Duration, callback: TickCallback) -> TimerHandle;

    /// Cancels a pending callback. No-op for stale or unknown handles.
    fn cancel(&self, handle: TimerHandle);
}
