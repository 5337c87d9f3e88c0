// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notification**: Banner display duration and countdown cadence
//! - **Tables**: Timestamp rendering for table cells
//! - **Diagnostics**: Event buffer sizing

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default display duration for a notification banner (in seconds).
pub const DEFAULT_NOTIFY_DURATION_SECS: u32 = 5;

/// Minimum notification display duration (in seconds).
pub const MIN_NOTIFY_DURATION_SECS: u32 = 1;

/// Maximum notification display duration (in seconds).
pub const MAX_NOTIFY_DURATION_SECS: u32 = 30;

/// Fixed delay between countdown ticks (in milliseconds).
///
/// The banner counts down one second per tick, so this stays at one
/// second regardless of the configured display duration.
pub const COUNTDOWN_TICK_MS: u64 = 1000;

// ==========================================================================
// Table Display Defaults
// ==========================================================================

/// Default `chrono` format string for timestamps in table cells.
pub const DEFAULT_DATE_FORMAT: &str = "%d %b %Y";

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default capacity of the diagnostics event buffer.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;
