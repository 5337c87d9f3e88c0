// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting activity reports.
//!
//! This module provides infrastructure for capturing diagnostic events
//! during application usage, storing them in a memory-bounded circular
//! buffer, and exporting them as JSON for analysis.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped record of a [`UiAction`]
//! - [`DiagnosticsHandle`]: Cheap-to-clone, non-blocking event sender
//! - [`DiagnosticsCollector`]: Receiver side that owns the buffer
//!
//! Events carry no user data beyond counts and indices; notification
//! message text never enters the diagnostics stream.

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, UiAction};
