//! Host-surface seams the pipeline reads from and writes to.
//!
//! A browser host backs these with DOM elements; tests and the terminal host
//! use the in-memory versions in [`crate::memory`].

/// Read access to a form's inputs, plus the two field-level side effects the
/// pipeline needs (focus and reset).
pub trait FieldSource {
    /// Raw value of the named input. Absent inputs read as the empty string.
    fn value(&self, field: &str) -> String;

    /// Whether the named checkbox is ticked. Absent inputs read as unticked.
    fn is_checked(&self, field: &str) -> bool;

    /// Moves input focus to the named field.
    fn focus(&mut self, field: &str);

    /// Restores every input to its initial, empty state.
    fn reset(&mut self);
}

/// Visual state of the feedback region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackTone {
    #[default]
    Neutral,
    Error,
}

/// The feedback text region and the submit control of one form.
pub trait FeedbackSink {
    /// Empties the feedback text and drops any error styling.
    fn clear_feedback(&mut self);

    fn show_feedback(&mut self, message: &str, tone: FeedbackTone);

    fn submit_label(&self) -> String;

    fn is_submit_enabled(&self) -> bool;

    fn set_submit_state(&mut self, enabled: bool, label: &str);
}

/// A dialog that can be asked to open.
pub trait ModalTrigger {
    fn open(&mut self);
}
