use async_trait::async_trait;
use mappets_core::{Payload, SubmissionOutcome};

/// Body encoding used for a delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// `application/json` object of string fields.
    Json,
    /// `multipart/form-data` with one text part per field.
    Multipart,
}

/// Sends one payload to the relay and reports how it went.
///
/// Implementations make exactly one attempt and fold every terminal branch
/// (delivered, transport failure, rejection) into a [`SubmissionOutcome`].
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    async fn send(&self, payload: &Payload, encoding: Encoding) -> SubmissionOutcome;
}

#[async_trait]
impl<T> NotificationChannel for std::sync::Arc<T>
where
    T: NotificationChannel + ?Sized,
{
    async fn send(&self, payload: &Payload, encoding: Encoding) -> SubmissionOutcome {
        (**self).send(payload, encoding).await
    }
}
