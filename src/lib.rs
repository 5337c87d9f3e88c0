// SPDX-License-Identifier: MPL-2.0
//! `line_lens` is the headless state engine behind a sample metadata
//! line-list viewer.
//!
//! It owns the front-end state that has actual behavior: the timed
//! notification banner, the metadata-template selection store, and the
//! table display utilities. Rendering is left entirely to the embedding
//! view layer. Components expose plain state snapshots and explicit
//! observer callbacks instead of coupling to any particular UI
//! framework's event system.

#![doc(html_root_url = "https://docs.rs/line_lens/0.1.0")]

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod infrastructure;
pub mod linelist;
pub mod notify;
pub mod palette;
pub mod tables;
