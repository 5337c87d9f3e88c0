// SPDX-License-Identifier: MPL-2.0
//! Line-list table state.
//!
//! This module holds the state behind the sample metadata line-list view.
//! Components follow the "state down, messages up" pattern: the embedding
//! view layer delivers messages (user picks a template, a fetch resolves)
//! and reads plain state back for rendering.
//!
//! Fetching template definitions from the server is the embedder's job;
//! the store only records the lifecycle of a fetch it is told about.

pub mod templates;

pub use templates::{Message as TemplateMessage, MetadataTemplate, TemplateStore};
