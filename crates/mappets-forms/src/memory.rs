//! In-memory host surface for the terminal host and for tests.

use std::collections::{BTreeMap, BTreeSet};

use crate::surface::{FeedbackSink, FeedbackTone, FieldSource};

/// A form whose inputs live in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    values: BTreeMap<String, String>,
    checked: BTreeSet<String>,
    focused: Option<String>,
}

impl MemoryForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_value(mut self, field: &str, value: &str) -> Self {
        self.set_value(field, value);
        self
    }

    #[must_use]
    pub fn with_checked(mut self, field: &str) -> Self {
        self.set_checked(field, true);
        self
    }

    pub fn set_value(&mut self, field: &str, value: &str) {
        self.values.insert(field.to_string(), value.to_string());
    }

    pub fn set_checked(&mut self, field: &str, checked: bool) {
        if checked {
            self.checked.insert(field.to_string());
        } else {
            self.checked.remove(field);
        }
    }

    /// The field that last received focus, if any.
    #[must_use]
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// `true` when every input is blank and no checkbox is ticked.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.values.values().all(String::is_empty) && self.checked.is_empty()
    }
}

impl FieldSource for MemoryForm {
    fn value(&self, field: &str) -> String {
        self.values.get(field).cloned().unwrap_or_default()
    }

    fn is_checked(&self, field: &str) -> bool {
        self.checked.contains(field)
    }

    fn focus(&mut self, field: &str) {
        self.focused = Some(field.to_string());
    }

    fn reset(&mut self) {
        self.values.clear();
        self.checked.clear();
    }
}

/// Feedback region and submit control held in memory.
///
/// Every submit-state change is recorded so callers can inspect the busy
/// transition after the fact.
#[derive(Debug, Clone)]
pub struct MemoryFeedback {
    message: String,
    tone: FeedbackTone,
    submit_label: String,
    submit_enabled: bool,
    submit_history: Vec<(bool, String)>,
}

impl MemoryFeedback {
    #[must_use]
    pub fn new(submit_label: &str) -> Self {
        Self {
            message: String::new(),
            tone: FeedbackTone::Neutral,
            submit_label: submit_label.to_string(),
            submit_enabled: true,
            submit_history: Vec::new(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn tone(&self) -> FeedbackTone {
        self.tone
    }

    #[must_use]
    pub fn submit_history(&self) -> &[(bool, String)] {
        &self.submit_history
    }
}

impl FeedbackSink for MemoryFeedback {
    fn clear_feedback(&mut self) {
        self.message.clear();
        self.tone = FeedbackTone::Neutral;
    }

    fn show_feedback(&mut self, message: &str, tone: FeedbackTone) {
        self.message = message.to_string();
        self.tone = tone;
    }

    fn submit_label(&self) -> String {
        self.submit_label.clone()
    }

    fn is_submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    fn set_submit_state(&mut self, enabled: bool, label: &str) {
        self.submit_enabled = enabled;
        self.submit_label = label.to_string();
        self.submit_history.push((enabled, label.to_string()));
    }
}
