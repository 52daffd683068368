//! Drives one form through validation, delivery and feedback.

use std::ops::{Deref, DerefMut};

use mappets_core::app_config::DEFAULT_SUPPORT_EMAIL;
use mappets_core::{FailureReason, SubmissionOutcome, ValidationError};
use mappets_relay::NotificationChannel;

use crate::policy::ValidationPolicy;
use crate::surface::{FeedbackSink, FeedbackTone, FieldSource, ModalTrigger};

/// Label the submit control shows while a delivery is in flight.
pub const SENDING_LABEL: &str = "Enviando...";

/// What a call to [`FormController::on_submit`] ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReport {
    /// The submit control was disabled, so no attempt was made.
    Ignored,
    /// A rule failed; nothing was sent.
    Invalid(ValidationError),
    Delivered,
    Failed(FailureReason),
}

/// Submission pipeline for one form.
///
/// Owns the form's policy, the delivery channel and, optionally, the modal
/// opened after a successful delivery.
pub struct FormController<P, C> {
    policy: P,
    channel: C,
    modal: Option<Box<dyn ModalTrigger>>,
    support_email: String,
}

impl<P, C> FormController<P, C>
where
    P: ValidationPolicy,
    C: NotificationChannel,
{
    #[must_use]
    pub fn new(policy: P, channel: C) -> Self {
        Self {
            policy,
            channel,
            modal: None,
            support_email: DEFAULT_SUPPORT_EMAIL.to_string(),
        }
    }

    /// Opens `modal` after every successful delivery.
    #[must_use]
    pub fn with_modal(mut self, modal: Box<dyn ModalTrigger>) -> Self {
        self.modal = Some(modal);
        self
    }

    /// Overrides the fallback contact named in failure feedback.
    #[must_use]
    pub fn with_support_email(mut self, support_email: &str) -> Self {
        self.support_email = support_email.to_string();
        self
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Handles one submit event.
    ///
    /// The host has already suppressed native submission. The submit control
    /// is disabled for the whole delivery and is restored on every exit path,
    /// including when this future is dropped mid-flight.
    pub async fn on_submit<F, S>(&mut self, fields: &mut F, feedback: &mut S) -> SubmitReport
    where
        F: FieldSource,
        S: FeedbackSink,
    {
        let form = self.policy.name();

        if !feedback.is_submit_enabled() {
            tracing::debug!(form, "submit ignored while a delivery is in flight");
            return SubmitReport::Ignored;
        }

        feedback.clear_feedback();

        let payload = match self.policy.validate(&*fields) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::debug!(form, field = %err.field, "validation failed");
                feedback.show_feedback(&err.message, FeedbackTone::Error);
                fields.focus(&err.field);
                return SubmitReport::Invalid(err);
            }
        };

        let mut busy = BusySubmit::engage(feedback);

        match self.channel.send(&payload, self.policy.encoding()).await {
            SubmissionOutcome::Success => {
                tracing::info!(form, "submission delivered");
                busy.show_feedback(self.policy.success_message(), FeedbackTone::Neutral);
                fields.reset();
                if let Some(modal) = self.modal.as_mut() {
                    modal.open();
                }
                SubmitReport::Delivered
            }
            SubmissionOutcome::Failure { reason } => {
                tracing::warn!(form, %reason, "submission failed");
                let message = self.policy.failure_message(&self.support_email);
                busy.show_feedback(&message, FeedbackTone::Error);
                SubmitReport::Failed(reason)
            }
        }
    }
}

/// Holds the submit control in its busy state until dropped.
struct BusySubmit<'a, S: FeedbackSink> {
    sink: &'a mut S,
    original_label: String,
}

impl<'a, S: FeedbackSink> BusySubmit<'a, S> {
    fn engage(sink: &'a mut S) -> Self {
        let original_label = sink.submit_label();
        sink.set_submit_state(false, SENDING_LABEL);
        Self {
            sink,
            original_label,
        }
    }
}

impl<S: FeedbackSink> Deref for BusySubmit<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.sink
    }
}

impl<S: FeedbackSink> DerefMut for BusySubmit<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.sink
    }
}

impl<S: FeedbackSink> Drop for BusySubmit<'_, S> {
    fn drop(&mut self) {
        self.sink.set_submit_state(true, &self.original_label);
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
