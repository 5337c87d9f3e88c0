// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`tokio_scheduler`]: One-shot timers on a tokio runtime (implements [`Scheduler`])
//! - [`manual_scheduler`]: Deterministic virtual-time scheduler for tests and
//!   single-threaded embedders (implements [`Scheduler`])
//!
//! [`Scheduler`]: crate::application::port::Scheduler

pub mod manual_scheduler;
pub mod tokio_scheduler;

// Re-export main types for convenience
pub use manual_scheduler::ManualScheduler;
pub use tokio_scheduler::TokioScheduler;
