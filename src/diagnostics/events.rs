// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.
//!
//! Events describe what the UI state engine did, not what the user saw:
//! counts and indices only, never message text or template contents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// State-engine activity that can be captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UiAction {
    // ==========================================================================
    // Notification Banner
    // ==========================================================================
    /// A notification trigger showed the banner or restarted its countdown.
    NotificationShown {
        /// True when the banner was already visible and only the
        /// countdown was restarted.
        restarted: bool,
    },

    /// The countdown reached zero and the banner hid itself.
    NotificationExpired,

    // ==========================================================================
    // Template Selection
    // ==========================================================================
    /// A template fetch began.
    TemplatesLoadStarted,

    /// A template fetch completed.
    TemplatesLoaded {
        /// Number of templates delivered (excluding the placeholder entry).
        count: usize,
    },

    /// A template fetch failed.
    TemplatesLoadFailed,

    /// The user switched the active template.
    TemplateSelected {
        /// Index into the stored template list.
        index: usize,
    },
}

/// A single timestamped diagnostic record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticEvent {
    /// When the event was recorded (UTC).
    pub timestamp: DateTime<Utc>,
    /// What happened.
    #[serde(flatten)]
    pub action: UiAction,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(action: UiAction) -> Self {
        Self {
            timestamp: Utc::now(),
            action,
        }
    }
}
