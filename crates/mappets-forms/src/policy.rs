//! The per-form validation contract and the rule helpers the policies share.

use mappets_core::{is_valid_email, Payload, ValidationError};
use mappets_relay::Encoding;

use crate::surface::FieldSource;

/// Turns raw form input into a payload, or the first rule it breaks.
///
/// Rules run in a fixed order and stop at the first failure; a policy never
/// reports more than one error per attempt.
pub trait ValidationPolicy {
    /// Short identifier used in logs (`"deletion"`, `"support"`, ...).
    fn name(&self) -> &'static str;

    /// How the payload is encoded on the wire.
    fn encoding(&self) -> Encoding;

    /// Validates `fields` and builds the payload to deliver.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first rule that fails.
    fn validate(&self, fields: &dyn FieldSource) -> Result<Payload, ValidationError>;

    /// Feedback shown after the relay accepts the payload.
    fn success_message(&self) -> &'static str;

    /// Feedback shown when delivery fails, naming the fallback contact.
    fn failure_message(&self, support_email: &str) -> String;
}

/// Trimmed value of a field that must not be blank.
pub(crate) fn required(
    fields: &dyn FieldSource,
    field: &str,
    message: &str,
) -> Result<String, ValidationError> {
    let value = fields.value(field).trim().to_string();
    if value.is_empty() {
        return Err(ValidationError::new(field, message));
    }
    Ok(value)
}

/// Trimmed value of a required email field.
///
/// A blank value fails with `missing`; a value the email-input format check
/// rejects fails with `malformed`.
pub(crate) fn required_email(
    fields: &dyn FieldSource,
    field: &str,
    missing: &str,
    malformed: &str,
) -> Result<String, ValidationError> {
    let value = required(fields, field, missing)?;
    if !is_valid_email(&value) {
        return Err(ValidationError::new(field, malformed));
    }
    Ok(value)
}

/// Trimmed value of an optional field; blank when absent.
pub(crate) fn optional(fields: &dyn FieldSource, field: &str) -> String {
    fields.value(field).trim().to_string()
}
