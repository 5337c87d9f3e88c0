// SPDX-License-Identifier: MPL-2.0
//! Countdown state machine for the notification banner.
//!
//! `NotificationTimer` owns a single banner's lifecycle: hidden until
//! triggered, visible while the countdown runs, hidden again when it
//! reaches zero. Re-triggering cancels the pending tick and restarts the
//! countdown, so the most recent trigger always wins and at most one
//! tick is ever scheduled.

use crate::application::port::{Scheduler, TimerHandle};
use crate::config::{Config, COUNTDOWN_TICK_MS};
use crate::diagnostics::{DiagnosticsHandle, UiAction};

use super::duration::NotifyDuration;
use super::notification::Notification;

use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

type VisibilityListener = Arc<dyn Fn(bool) + Send + Sync + 'static>;

/// Read-only snapshot of the banner state for the view layer.
#[derive(Debug, Clone)]
pub struct NotificationState {
    /// Whether the banner should currently be rendered.
    pub visible: bool,
    /// Whole seconds left before the banner hides itself.
    pub seconds_remaining: u32,
    /// The most recent payload, kept after expiry until the next trigger.
    pub notification: Option<Notification>,
}

struct TimerState {
    visible: bool,
    seconds_remaining: u32,
    pending: Option<TimerHandle>,
    current: Option<Notification>,
}

struct TimerCore {
    scheduler: Arc<dyn Scheduler>,
    duration: NotifyDuration,
    state: Mutex<TimerState>,
    listeners: Mutex<Vec<VisibilityListener>>,
    diagnostics: Mutex<Option<DiagnosticsHandle>>,
}

impl TimerCore {
    /// Arms the next countdown tick. The scheduled callback holds only a
    /// weak reference, so a tick that fires after the timer was dropped
    /// finds nothing to upgrade and does nothing.
    fn schedule_tick(core: &Arc<TimerCore>) -> TimerHandle {
        let weak: Weak<TimerCore> = Arc::downgrade(core);
        core.scheduler.schedule(
            Duration::from_millis(COUNTDOWN_TICK_MS),
            Box::new(move || {
                if let Some(core) = weak.upgrade() {
                    TimerCore::tick(&core);
                }
            }),
        )
    }

    /// One countdown step: decrement, then either re-arm or hide.
    fn tick(core: &Arc<TimerCore>) {
        let expired = {
            let Ok(mut state) = core.state.lock() else {
                return;
            };
            state.seconds_remaining = state.seconds_remaining.saturating_sub(1);
            if state.seconds_remaining > 0 {
                state.pending = Some(Self::schedule_tick(core));
                false
            } else {
                // The stored handle is the tick that just fired; cancelling
                // a fired handle is a guaranteed no-op.
                if let Some(handle) = state.pending.take() {
                    core.scheduler.cancel(handle);
                }
                let was_visible = state.visible;
                state.visible = false;
                was_visible
            }
        };

        if expired {
            core.emit_visibility(false);
            core.log(UiAction::NotificationExpired);
        }
    }

    fn emit_visibility(&self, visible: bool) {
        let listeners: Vec<VisibilityListener> = match self.listeners.lock() {
            Ok(listeners) => listeners.iter().map(Arc::clone).collect(),
            Err(_) => return,
        };
        for listener in listeners {
            (*listener)(visible);
        }
    }

    fn log(&self, action: UiAction) {
        if let Ok(diagnostics) = self.diagnostics.lock() {
            if let Some(handle) = diagnostics.as_ref() {
                handle.log_action(action);
            }
        }
    }
}

impl Drop for TimerCore {
    fn drop(&mut self) {
        // Teardown cancels the in-flight tick so the scheduler does not
        // keep a callback armed for a component that no longer exists.
        if let Ok(mut state) = self.state.lock() {
            if let Some(handle) = state.pending.take() {
                self.scheduler.cancel(handle);
            }
        }
    }
}

/// Visibility and countdown state of the transient notification banner.
///
/// The timer is hidden on creation. [`notify`](Self::notify) shows the
/// banner for the configured duration (default 5 seconds) and arms a
/// one-second countdown tick through the injected [`Scheduler`]. Each
/// tick decrements the remaining seconds; at zero the banner hides and
/// no further ticks are scheduled.
///
/// The only ordering hazard is a trigger racing a pending tick, and it
/// is resolved by cancel-then-reschedule inside `notify`: the last
/// trigger wins and countdowns never overlap.
pub struct NotificationTimer {
    core: Arc<TimerCore>,
}

impl NotificationTimer {
    /// Creates a hidden timer with the default display duration.
    #[must_use]
    pub fn new(scheduler: Arc<dyn Scheduler>) -> Self {
        Self::with_duration(scheduler, NotifyDuration::default())
    }

    /// Creates a hidden timer with an explicit display duration.
    #[must_use]
    pub fn with_duration(scheduler: Arc<dyn Scheduler>, duration: NotifyDuration) -> Self {
        Self {
            core: Arc::new(TimerCore {
                scheduler,
                duration,
                state: Mutex::new(TimerState {
                    visible: false,
                    seconds_remaining: 0,
                    pending: None,
                    current: None,
                }),
                listeners: Mutex::new(Vec::new()),
                diagnostics: Mutex::new(None),
            }),
        }
    }

    /// Creates a timer with the display duration from configuration.
    #[must_use]
    pub fn from_config(scheduler: Arc<dyn Scheduler>, config: &Config) -> Self {
        Self::with_duration(scheduler, NotifyDuration::from_config(config))
    }

    /// Sets the diagnostics handle for activity logging.
    pub fn set_diagnostics(&self, handle: DiagnosticsHandle) {
        if let Ok(mut diagnostics) = self.core.diagnostics.lock() {
            *diagnostics = Some(handle);
        }
    }

    /// Shows `notification` and (re)starts the countdown.
    ///
    /// Any pending tick is cancelled before the new one is armed, so
    /// rapid re-triggering always results in a full countdown from the
    /// most recent call and never in overlapping countdowns.
    pub fn notify(&self, notification: Notification) {
        let restarted = {
            let Ok(mut state) = self.core.state.lock() else {
                return;
            };
            if let Some(handle) = state.pending.take() {
                self.core.scheduler.cancel(handle);
            }
            let restarted = state.visible;
            state.seconds_remaining = self.core.duration.value();
            state.visible = true;
            state.current = Some(notification);
            state.pending = Some(TimerCore::schedule_tick(&self.core));
            restarted
        };

        if !restarted {
            self.core.emit_visibility(true);
        }
        self.core.log(UiAction::NotificationShown { restarted });
    }

    /// Registers a listener invoked whenever visibility toggles.
    ///
    /// The listener receives the new visibility. It is called after the
    /// state change is committed, outside the internal lock.
    pub fn on_visibility_change(&self, listener: impl Fn(bool) + Send + Sync + 'static) {
        if let Ok(mut listeners) = self.core.listeners.lock() {
            listeners.push(Arc::new(listener));
        }
    }

    /// Returns a snapshot of the banner state for rendering.
    #[must_use]
    pub fn state(&self) -> NotificationState {
        self.core
            .state
            .lock()
            .map(|state| NotificationState {
                visible: state.visible,
                seconds_remaining: state.seconds_remaining,
                notification: state.current.clone(),
            })
            .unwrap_or(NotificationState {
                visible: false,
                seconds_remaining: 0,
                notification: None,
            })
    }

    /// Returns whether the banner is currently visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.core
            .state
            .lock()
            .map(|state| state.visible)
            .unwrap_or(false)
    }

    /// Returns the whole seconds left before auto-hide (0 when hidden).
    #[must_use]
    pub fn seconds_remaining(&self) -> u32 {
        self.core
            .state
            .lock()
            .map(|state| state.seconds_remaining)
            .unwrap_or(0)
    }

    /// Returns whether a countdown tick is currently scheduled.
    #[must_use]
    pub fn has_pending_tick(&self) -> bool {
        self.core
            .state
            .lock()
            .map(|state| state.pending.is_some())
            .unwrap_or(false)
    }

    /// Returns the configured display duration.
    #[must_use]
    pub fn duration(&self) -> NotifyDuration {
        self.core.duration
    }
}
