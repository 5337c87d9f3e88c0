// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters
//! implement. These traits use only domain types, ensuring the state
//! components remain independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`scheduler`]: One-shot delayed execution with cancellation
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so components can be driven from async runtimes
//! - Cancelling an unknown or already-fired handle is always a no-op
//! - No `async fn`: adapters bridge to their runtime internally

pub mod scheduler;

// Re-export main types for convenience
pub use scheduler::{Scheduler, TickCallback, TimerHandle};
