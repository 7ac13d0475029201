//! `reqwest`-backed URL validator.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::domain::validation::{FetchFailure, UrlValidator};

/// How the response of a validation fetch is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Only transport failures reject a URL. A target answering 404 or 500
    /// still counts as reachable.
    #[default]
    Transport,
    /// The final response must also be 2xx or 3xx.
    Strict,
}

impl FromStr for ValidationPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "transport" => Ok(Self::Transport),
            "strict" => Ok(Self::Strict),
            other => anyhow::bail!(
                "VALIDATION_POLICY must be 'transport' or 'strict', got '{}'",
                other
            ),
        }
    }
}

impl fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport => f.write_str("transport"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

/// Validates a URL by issuing a single `GET` to it.
///
/// Redirects are followed by the client. The response body is never read.
pub struct HttpUrlValidator {
    client: Client,
    policy: ValidationPolicy,
}

impl HttpUrlValidator {
    /// Builds a validator whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(timeout: Duration, policy: ValidationPolicy) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("build reqwest client")?;
        Ok(Self { client, policy })
    }
}

#[async_trait]
impl UrlValidator for HttpUrlValidator {
    async fn validate(&self, url: &str) -> Result<(), FetchFailure> {
        let target = Url::parse(url).map_err(|e| FetchFailure::InvalidUrl(e.to_string()))?;

        if !matches!(target.scheme(), "http" | "https") {
            return Err(FetchFailure::InvalidUrl(format!(
                "unsupported scheme '{}'",
                target.scheme()
            )));
        }

        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|e| FetchFailure::Transport(e.to_string()))?;

        let status = response.status();
        debug!("Validation fetch of {} returned {}", url, status);

        if self.policy == ValidationPolicy::Strict
            && !(status.is_success() || status.is_redirection())
        {
            return Err(FetchFailure::Status(status.as_u16()));
        }

        Ok(())
    }
}
