//! Shared data model for the Mappets site workflows.
//!
//! Holds the value types that flow between the form validation policies, the
//! relay client and the coordinate picker, plus the site configuration.

pub mod app_config;
pub mod config;
pub mod coordinate;
pub mod outcome;
pub mod payload;
pub mod validation;

use thiserror::Error;

pub use app_config::{Environment, SiteConfig};
pub use config::{load_site_config, load_site_config_from_env};
pub use coordinate::{Coordinate, COORDINATE_DECIMALS};
pub use outcome::{FailureReason, SubmissionOutcome};
pub use payload::Payload;
pub use validation::{is_valid_email, ValidationError};

/// Errors raised while assembling [`SiteConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
