use std::env;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use super::types::{DiscoveryRequest, WireRecord};
use super::{DiscoveryClient, DiscoveryError};
use crate::content::ContentRecord;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Clone)]
struct ApiToken(String);

impl std::fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Discovery backend reached over HTTP.
///
/// Configuration via environment variables:
/// - `POLYSCOUT_DISCOVERY_URL`: endpoint receiving the crawl request (required)
/// - `POLYSCOUT_DISCOVERY_TOKEN`: bearer token (optional)
/// - `POLYSCOUT_DISCOVERY_TIMEOUT_SECS`: per-request timeout (default 20)
#[derive(Debug, Clone)]
pub struct HttpDiscoveryClient {
    http: Client,
    endpoint: String,
    token: Option<ApiToken>,
    timeout: Duration,
}

impl HttpDiscoveryClient {
    pub fn from_env(http: Client) -> Result<Self, DiscoveryError> {
        let endpoint = non_empty_var("POLYSCOUT_DISCOVERY_URL").ok_or(DiscoveryError::NotConfigured)?;
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(DiscoveryError::InvalidConfig(format!(
                "POLYSCOUT_DISCOVERY_URL must be http(s), got '{endpoint}'"
            )));
        }

        let timeout = match non_empty_var("POLYSCOUT_DISCOVERY_TIMEOUT_SECS") {
            Some(raw) => parse_timeout(&raw)?,
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            http,
            endpoint,
            token: non_empty_var("POLYSCOUT_DISCOVERY_TOKEN").map(ApiToken),
            timeout,
        })
    }

    #[cfg(test)]
    pub(crate) fn with_endpoint(http: Client, endpoint: &str) -> Self {
        Self {
            http,
            endpoint: endpoint.to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl DiscoveryClient for HttpDiscoveryClient {
    async fn discover(
        &self,
        request: &DiscoveryRequest,
    ) -> Result<Vec<ContentRecord>, DiscoveryError> {
        let mut builder = self
            .http
            .post(&self.endpoint)
            .header("User-Agent", crate::USER_AGENT)
            .json(request)
            .timeout(self.timeout);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(&token.0);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let snippet: String = text.chars().take(200).collect();
            warn!(status = %status, "discovery backend error");
            return Err(DiscoveryError::Status {
                code: status.as_u16(),
                message: format!("HTTP {status}: {snippet}"),
            });
        }

        // Decode per record so one malformed entry cannot reject the batch.
        let raw: Vec<serde_json::Value> = serde_json::from_str(&text)?;
        let received = raw.len();
        let records: Vec<ContentRecord> = raw
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<WireRecord>(value) {
                Ok(wire) => wire.into_record(),
                Err(e) => {
                    debug!(error = %e, "skipped malformed discovery record");
                    None
                }
            })
            .collect();
        if records.len() < received {
            debug!(
                dropped = received - records.len(),
                "skipped records without URL or with invalid fields"
            );
        }

        debug!(urls = request.urls.len(), records = records.len(), "discovery complete");
        Ok(records)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_timeout(raw: &str) -> Result<Duration, DiscoveryError> {
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(DiscoveryError::InvalidConfig(format!(
            "POLYSCOUT_DISCOVERY_TIMEOUT_SECS must be a positive integer, got '{raw}'"
        ))),
    }
}
