//! Field-level validation primitives shared by every form policy.

use std::sync::LazyLock;

use regex::Regex;

/// A single failed validation rule.
///
/// `field` names the input that should receive focus; `message` is the text
/// shown in the form's feedback region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

// Same grammar browsers apply to `<input type="email">`.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("valid email regex")
});

/// Returns `true` if `value` passes the HTML email-input format check.
///
/// An empty value is treated as not valid; callers check presence first so
/// the two cases can carry different messages.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    !value.is_empty() && EMAIL_RE.is_match(value)
}
