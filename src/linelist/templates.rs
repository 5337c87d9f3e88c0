// SPDX-License-Identifier: MPL-2.0
//! Metadata-template selection state for the line-list table.
//!
//! A template names an ordered subset of metadata fields to show as table
//! columns. The store always keeps a placeholder "no template" entry at
//! index 0 so the selector can render a neutral first option; its display
//! label is injected by the embedder.

use crate::diagnostics::{DiagnosticsHandle, UiAction};

/// A named, ordered set of metadata fields to display as columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataTemplate {
    /// Server-side identifier. The placeholder entry has none.
    id: Option<i64>,
    /// Display name.
    name: String,
    /// Ordered field names.
    fields: Vec<String>,
}

impl MetadataTemplate {
    /// Creates a template with a server-side identifier.
    pub fn new(id: i64, name: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            fields,
        }
    }

    /// Creates the placeholder entry shown before any template is chosen.
    fn placeholder(label: impl Into<String>) -> Self {
        Self {
            id: None,
            name: label.into(),
            fields: Vec::new(),
        }
    }

    /// Returns the server-side identifier, if any.
    #[must_use]
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ordered field names.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns true for the placeholder "no template" entry.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.id.is_none()
    }
}

/// Messages consumed by [`TemplateStore::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A template fetch began.
    LoadStarted,
    /// A template fetch delivered its results.
    LoadCompleted(Vec<MetadataTemplate>),
    /// A template fetch failed.
    LoadFailed,
    /// The user picked the template at this index.
    Select(usize),
}

/// Selection state for the line-list template picker.
#[derive(Debug)]
pub struct TemplateStore {
    fetching: bool,
    error: bool,
    templates: Vec<MetadataTemplate>,
    current: usize,
    placeholder_label: String,
    diagnostics: Option<DiagnosticsHandle>,
}

impl TemplateStore {
    /// Creates an empty store.
    ///
    /// `placeholder_label` is the display text for the "no template"
    /// entry that heads the list once templates load.
    #[must_use]
    pub fn new(placeholder_label: impl Into<String>) -> Self {
        Self {
            fetching: false,
            error: false,
            templates: Vec::new(),
            current: 0,
            placeholder_label: placeholder_label.into(),
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle for activity logging.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Applies a message to the store.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::LoadStarted => {
                self.fetching = true;
                self.error = false;
                self.log(UiAction::TemplatesLoadStarted);
            }
            Message::LoadCompleted(templates) => {
                self.fetching = false;
                self.log(UiAction::TemplatesLoaded {
                    count: templates.len(),
                });
                let mut list = Vec::with_capacity(templates.len() + 1);
                list.push(MetadataTemplate::placeholder(self.placeholder_label.as_str()));
                list.extend(templates);
                self.templates = list;
            }
            Message::LoadFailed => {
                self.fetching = false;
                self.error = true;
                self.log(UiAction::TemplatesLoadFailed);
            }
            Message::Select(index) => {
                // Out-of-range picks can happen when a reload shrinks the
                // list under the selector; they are dropped, not clamped.
                if index < self.templates.len() {
                    self.current = index;
                    self.log(UiAction::TemplateSelected { index });
                }
            }
        }
    }

    /// Returns true while a fetch is in flight.
    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    /// Returns true if the most recent fetch failed.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Returns the stored templates, placeholder entry first.
    ///
    /// Empty until the first `LoadCompleted`.
    #[must_use]
    pub fn templates(&self) -> &[MetadataTemplate] {
        &self.templates
    }

    /// Returns the index of the active template.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the active template, if the list has loaded.
    #[must_use]
    pub fn current_template(&self) -> Option<&MetadataTemplate> {
        self.templates.get(self.current)
    }

    fn log(&self, action: UiAction) {
        if let Some(handle) = &self.diagnostics {
            handle.log_action(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_templates() -> Vec<MetadataTemplate> {
        vec![
            MetadataTemplate::new(11, "Surveillance", vec!["organism".into(), "region".into()]),
            MetadataTemplate::new(12, "Outbreak", vec!["onset-date".into()]),
        ]
    }

    #[test]
    fn new_store_is_idle_and_empty() {
        let store = TemplateStore::new("No template");
        assert!(!store.is_fetching());
        assert!(!store.has_error());
        assert!(store.templates().is_empty());
        assert_eq!(store.current_index(), 0);
        assert!(store.current_template().is_none());
    }

    #[test]
    fn load_started_sets_fetching_and_clears_error() {
        let mut store = TemplateStore::new("No template");
        store.update(Message::LoadFailed);
        assert!(store.has_error());

        store.update(Message::LoadStarted);
        assert!(store.is_fetching());
        assert!(!store.has_error());
    }

    #[test]
    fn load_completed_prepends_placeholder() {
        let mut store = TemplateStore::new("No template");
        store.update(Message::LoadStarted);
        store.update(Message::LoadCompleted(sample_templates()));

        assert!(!store.is_fetching());
        let templates = store.templates();
        assert_eq!(templates.len(), 3);
        assert!(templates[0].is_placeholder());
        assert_eq!(templates[0].name(), "No template");
        assert!(templates[0].fields().is_empty());
        assert_eq!(templates[1].name(), "Surveillance");
        assert_eq!(templates[2].id(), Some(12));
    }

    #[test]
    fn load_failed_sets_error_and_stops_fetching() {
        let mut store = TemplateStore::new("No template");
        store.update(Message::LoadStarted);
        store.update(Message::LoadFailed);

        assert!(!store.is_fetching());
        assert!(store.has_error());
    }

    #[test]
    fn select_switches_current_template() {
        let mut store = TemplateStore::new("No template");
        store.update(Message::LoadCompleted(sample_templates()));

        store.update(Message::Select(2));
        assert_eq!(store.current_index(), 2);
        let current = store.current_template().expect("template should exist");
        assert_eq!(current.name(), "Outbreak");
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut store = TemplateStore::new("No template");
        store.update(Message::LoadCompleted(sample_templates()));
        store.update(Message::Select(1));

        store.update(Message::Select(99));
        assert_eq!(store.current_index(), 1);
    }

    #[test]
    fn default_selection_is_the_placeholder() {
        let mut store = TemplateStore::new("No template");
        store.update(Message::LoadCompleted(sample_templates()));

        let current = store.current_template().expect("list has loaded");
        assert!(current.is_placeholder());
    }

    #[test]
    fn reload_replaces_template_list() {
        let mut store = TemplateStore::new("No template");
        store.update(Message::LoadCompleted(sample_templates()));
        store.update(Message::LoadCompleted(vec![MetadataTemplate::new(
            20,
            "Minimal",
            vec!["organism".into()],
        )]));

        assert_eq!(store.templates().len(), 2);
        assert_eq!(store.templates()[1].name(), "Minimal");
    }

    #[test]
    fn store_logs_lifecycle_to_diagnostics() {
        use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};

        let (mut collector, handle) = DiagnosticsCollector::new(BufferCapacity::new(100));
        let mut store = TemplateStore::new("No template");
        store.set_diagnostics(handle);

        store.update(Message::LoadStarted);
        store.update(Message::LoadCompleted(sample_templates()));
        store.update(Message::Select(1));
        collector.process_pending();

        let actions: Vec<_> = collector.events().map(|e| e.action.clone()).collect();
        assert_eq!(
            actions,
            vec![
                UiAction::TemplatesLoadStarted,
                UiAction::TemplatesLoaded { count: 2 },
                UiAction::TemplateSelected { index: 1 },
            ]
        );
    }
}
