// SPDX-License-Identifier: MPL-2.0
//! Timed notification banner state.
//!
//! This module owns the visibility and countdown state of the transient
//! banner the view layer shows after an application event (save success,
//! load failure, etc.). It follows the toast/snackbar UX pattern: a
//! trigger shows the banner for a fixed number of seconds, re-triggering
//! restarts the countdown, and the banner hides itself when the countdown
//! reaches zero.
//!
//! # Components
//!
//! - [`notification`] - The `Notification` payload (message and icon)
//! - [`duration`] - Validated display-duration value
//! - [`timer`] - `NotificationTimer`, the countdown state machine
//!
//! # Usage
//!
//! ```
//! use line_lens::application::port::Scheduler;
//! use line_lens::infrastructure::ManualScheduler;
//! use line_lens::notify::{Notification, NotificationTimer};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let scheduler = Arc::new(ManualScheduler::new());
//! let timer = NotificationTimer::new(Arc::clone(&scheduler) as Arc<dyn Scheduler>);
//!
//! timer.notify(Notification::new("Samples saved", "ok"));
//! assert!(timer.is_visible());
//!
//! // Five seconds later the banner has hidden itself.
//! scheduler.advance(Duration::from_secs(5));
//! assert!(!timer.is_visible());
//! ```
//!
//! # Design Considerations
//!
//! - Scheduling is injected through the [`Scheduler`] port, so countdown
//!   behavior is deterministic under the manual test scheduler
//! - The view layer reads a state snapshot or registers an
//!   `on_visibility_change` listener; no UI-framework event bus involved
//! - Message and icon are opaque pass-through strings; resolving them to
//!   localized text and glyphs is the renderer's concern
//!
//! [`Scheduler`]: crate::application::port::Scheduler

mod duration;
mod notification;
mod timer;

pub use duration::NotifyDuration;
pub use notification::{Notification, NotificationId};
pub use timer::{NotificationState, NotificationTimer};
