//! Submission pipeline for the site's three outbound forms.
//!
//! Each form pairs a [`ValidationPolicy`] (raw fields to payload or a single
//! field error) with a [`FormController`] that drives the host surface through
//! validation, delivery and feedback.

pub mod commerce;
pub mod controller;
pub mod deletion;
pub mod memory;
pub mod policy;
pub mod support;
pub mod surface;

pub use commerce::CommercePolicy;
pub use controller::{FormController, SubmitReport, SENDING_LABEL};
pub use deletion::DeletionPolicy;
pub use memory::{MemoryFeedback, MemoryForm};
pub use policy::ValidationPolicy;
pub use support::SupportPolicy;
pub use surface::{FeedbackSink, FeedbackTone, FieldSource, ModalTrigger};
