//! HTTP client for the form relay.
//!
//! Wraps `reqwest` with the relay's content negotiation and collapses every
//! way a POST can end into a [`SubmissionOutcome`].

use std::time::Duration;

use async_trait::async_trait;
use mappets_core::{FailureReason, Payload, SiteConfig, SubmissionOutcome};
use reqwest::{Client, RequestBuilder, Url};

use crate::channel::{Encoding, NotificationChannel};
use crate::error::RelayError;

/// Client for the third-party form relay every site form posts to.
///
/// Use [`RelayClient::from_config`] in production or [`RelayClient::new`] to
/// point at a mock server in tests.
pub struct RelayClient {
    client: Client,
    endpoint: Url,
}

impl RelayClient {
    /// Creates a client for `endpoint`.
    ///
    /// `timeout` of `None` leaves the request unbounded; the relay call then
    /// waits for the server however long it takes.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::InvalidEndpoint`] if `endpoint` is not an
    /// absolute http(s) URL, or [`RelayError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(
        endpoint: &str,
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, RelayError> {
        let endpoint = parse_endpoint(endpoint)?;

        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, endpoint })
    }

    /// Creates a client from the relay settings in [`SiteConfig`].
    ///
    /// # Errors
    ///
    /// Same as [`RelayClient::new`].
    pub fn from_config(config: &SiteConfig) -> Result<Self, RelayError> {
        Self::new(
            &config.relay_endpoint,
            &config.relay_user_agent,
            config.relay_timeout_secs.map(Duration::from_secs),
        )
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn build_request(&self, payload: &Payload, encoding: Encoding) -> RequestBuilder {
        let request = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json");

        match encoding {
            // `.json` sets the Content-Type header itself.
            Encoding::Json => request.json(payload),
            Encoding::Multipart => {
                let form = payload
                    .iter()
                    .fold(reqwest::multipart::Form::new(), |form, (k, v)| {
                        form.text(k.to_owned(), v.to_owned())
                    });
                request.multipart(form)
            }
        }
    }
}

#[async_trait]
impl NotificationChannel for RelayClient {
    async fn send(&self, payload: &Payload, encoding: Encoding) -> SubmissionOutcome {
        let subject = payload.get("_subject").unwrap_or_default();
        tracing::debug!(
            endpoint = %self.endpoint,
            ?encoding,
            fields = payload.len(),
            subject,
            "posting payload to relay"
        );

        let response = match self.build_request(payload, encoding).send().await {
            Ok(response) => response,
            Err(e) => {
                let reason = FailureReason::Transport(e.to_string());
                tracing::warn!(endpoint = %self.endpoint, %reason, "relay delivery failed");
                return SubmissionOutcome::Failure { reason };
            }
        };

        let status = response.status();
        if !status.is_success() {
            let reason = FailureReason::Rejected {
                status: status.as_u16(),
            };
            tracing::warn!(endpoint = %self.endpoint, %reason, "relay delivery failed");
            return SubmissionOutcome::Failure { reason };
        }

        tracing::info!(endpoint = %self.endpoint, status = status.as_u16(), subject, "relay accepted payload");
        SubmissionOutcome::Success
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, RelayError> {
    let url = Url::parse(raw).map_err(|e| RelayError::InvalidEndpoint {
        endpoint: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(RelayError::InvalidEndpoint {
            endpoint: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_site_relay_address() {
        let client = RelayClient::new(
            "https://formsubmit.co/ajax/equipo@mappets.com.ar",
            "mappets-test/0.1",
            None,
        )
        .expect("client construction should not fail");
        assert_eq!(client.endpoint().host_str(), Some("formsubmit.co"));
        assert_eq!(client.endpoint().path(), "/ajax/equipo@mappets.com.ar");
    }

    #[test]
    fn new_rejects_relative_endpoint() {
        let result = RelayClient::new("/ajax/equipo", "mappets-test/0.1", None);
        assert!(
            matches!(result, Err(RelayError::InvalidEndpoint { .. })),
            "expected InvalidEndpoint"
        );
    }

    #[test]
    fn new_rejects_non_http_scheme() {
        let result = RelayClient::new("mailto:equipo@mappets.com.ar", "mappets-test/0.1", None);
        assert!(
            matches!(result, Err(RelayError::InvalidEndpoint { ref reason, .. }) if reason.contains("mailto")),
            "expected InvalidEndpoint for mailto scheme"
        );
    }

    #[test]
    fn from_config_uses_default_relay() {
        let client =
            RelayClient::from_config(&SiteConfig::default()).expect("default config should build");
        assert_eq!(
            client.endpoint().as_str(),
            "https://formsubmit.co/ajax/equipo@mappets.com.ar"
        );
    }
}
