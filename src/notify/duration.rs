// SPDX-License-Identifier: MPL-2.0
//! Notification display-duration value.
//!
//! This module provides a type-safe wrapper for the banner display
//! duration in seconds.

use crate::config::{
    Config, DEFAULT_NOTIFY_DURATION_SECS, MAX_NOTIFY_DURATION_SECS, MIN_NOTIFY_DURATION_SECS,
};

/// Banner display duration in seconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1-30 seconds).
///
/// # Example
///
/// ```
/// use line_lens::notify::NotifyDuration;
///
/// let duration = NotifyDuration::new(5);
/// assert_eq!(duration.value(), 5);
///
/// // Values outside range are clamped
/// let too_high = NotifyDuration::new(100);
/// assert_eq!(too_high.value(), 30); // Clamped to max
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifyDuration(u32);

impl NotifyDuration {
    /// Creates a new display duration, clamping to valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(MIN_NOTIFY_DURATION_SECS, MAX_NOTIFY_DURATION_SECS))
    }

    /// Reads the duration from configuration, falling back to the default.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config
                .notify_duration_secs
                .unwrap_or(DEFAULT_NOTIFY_DURATION_SECS),
        )
    }

    /// Returns the value as u32.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the duration as a `std::time::Duration`.
    #[must_use]
    pub fn as_duration(self) -> std::time::Duration {
        std::time::Duration::from_secs(u64::from(self.0))
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_NOTIFY_DURATION_SECS
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_NOTIFY_DURATION_SECS
    }
}

impl Default for NotifyDuration {
    fn default() -> Self {
        Self(DEFAULT_NOTIFY_DURATION_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(NotifyDuration::new(0).value(), MIN_NOTIFY_DURATION_SECS);
        assert_eq!(NotifyDuration::new(100).value(), MAX_NOTIFY_DURATION_SECS);
    }

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(NotifyDuration::new(1).value(), 1);
        assert_eq!(NotifyDuration::new(15).value(), 15);
        assert_eq!(NotifyDuration::new(30).value(), 30);
    }

    #[test]
    fn default_returns_expected_value() {
        assert_eq!(
            NotifyDuration::default().value(),
            DEFAULT_NOTIFY_DURATION_SECS
        );
    }

    #[test]
    fn from_config_uses_configured_value() {
        let config = Config {
            notify_duration_secs: Some(8),
            ..Config::default()
        };
        assert_eq!(NotifyDuration::from_config(&config).value(), 8);
    }

    #[test]
    fn from_config_falls_back_to_default() {
        let config = Config {
            notify_duration_secs: None,
            ..Config::default()
        };
        assert_eq!(
            NotifyDuration::from_config(&config).value(),
            DEFAULT_NOTIFY_DURATION_SECS
        );
    }

    #[test]
    fn as_duration_converts_correctly() {
        let duration = NotifyDuration::new(5);
        assert_eq!(duration.as_duration(), std::time::Duration::from_secs(5));
    }

    #[test]
    fn is_min_and_is_max_detect_bounds() {
        assert!(NotifyDuration::new(1).is_min());
        assert!(!NotifyDuration::new(15).is_min());
        assert!(NotifyDuration::new(30).is_max());
        assert!(!NotifyDuration::new(15).is_max());
    }
}
