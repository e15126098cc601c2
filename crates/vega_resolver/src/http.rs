//! HTTP client for the key-resolution endpoint.

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use std::time::Duration;
use vega_config::{CredentialBundle, KeyResolver, ResolveError};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the team credential endpoint.
///
/// Issues `GET {base_url}/v1/teams/{team_id}/credentials` and decodes the
/// JSON credential document. Requests carry an explicit timeout (10s by
/// default) and transport failures are retried exactly once; HTTP error
/// statuses and undecodable bodies are never retried.
///
/// ```no_run
/// # use vega_config::CredentialConfig;
/// # use vega_resolver::HttpKeyResolver;
/// # fn demo(config: &CredentialConfig) {
/// let resolver = HttpKeyResolver::new("https://keys.getvega.ai");
/// let _handle = config.setup_by_team(resolver, "team-1");
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpKeyResolver {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    retry: bool,
}

impl HttpKeyResolver {
    /// Creates a resolver against the endpoint at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            retry: true,
        }
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enables or disables the single retry on transport failure.
    #[must_use]
    pub fn with_retry(mut self, retry: bool) -> Self {
        self.retry = retry;
        self
    }

    async fn fetch(&self, url: &str) -> Result<String, ResolveError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let response = self
            .client
            .get(url)
            .headers(headers)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|err| ResolveError::Http(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ResolveError::Http(err.to_string()))?;

        if !status.is_success() {
            return Err(ResolveError::Endpoint {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl KeyResolver for HttpKeyResolver {
    async fn resolve(&self, team_id: &str) -> Result<CredentialBundle, ResolveError> {
        let url = format!("{}/v1/teams/{team_id}/credentials", self.base_url);

        let body = match self.fetch(&url).await {
            Err(ResolveError::Http(first)) if self.retry => {
                tracing::warn!(team_id, error = %first, "credential fetch failed, retrying once");
                self.fetch(&url).await?
            }
            other => other?,
        };

        if body.is_empty() {
            return Err(ResolveError::InvalidResponse(
                "empty response body".to_string(),
            ));
        }

        serde_json::from_str(&body).map_err(|err| {
            ResolveError::InvalidResponse(format!("failed to decode credential document: {err}"))
        })
    }
}
