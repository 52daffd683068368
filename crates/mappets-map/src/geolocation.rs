use std::time::Duration;

use async_trait::async_trait;
use mappets_core::Coordinate;
use thiserror::Error;

/// Options for a one-shot position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionRequest {
    pub high_accuracy: bool,
    pub timeout: Duration,
    /// Oldest cached fix the device may return. Zero forces a fresh fix.
    pub maximum_age: Duration,
}

impl PositionRequest {
    #[must_use]
    pub fn high_accuracy(timeout: Duration) -> Self {
        Self {
            high_accuracy: true,
            timeout,
            maximum_age: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("geolocation permission denied")]
    PermissionDenied,

    #[error("position unavailable")]
    PositionUnavailable,

    #[error("position request timed out")]
    Timeout,

    #[error("geolocation is not supported on this host")]
    Unsupported,
}

/// Device position source.
#[async_trait]
pub trait Geolocator: Send + Sync {
    /// Requests one position fix.
    ///
    /// # Errors
    ///
    /// Returns the [`GeolocationError`] the device reported.
    async fn current_position(
        &self,
        request: &PositionRequest,
    ) -> Result<Coordinate, GeolocationError>;
}
