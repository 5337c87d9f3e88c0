// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// A notification to be displayed to the user.
///
/// The message and icon identifier are opaque display data. The timer
/// carries them through to the view layer unmodified; neither value
/// affects countdown behavior.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    message: String,
    icon: String,
}

impl Notification {
    /// Creates a notification with the given message and icon identifier.
    pub fn new(message: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            message: message.into(),
            icon: icon.into(),
        }
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the display message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the icon identifier.
    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }
}
