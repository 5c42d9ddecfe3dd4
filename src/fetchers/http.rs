use crate::config::HttpFetcherConfig;
use crate::error::ScriptError;
use crate::fetchers::Fetcher;
use std::time::Duration;
use url::Url;

/// Fetches raw HTML with a plain GET request
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher from configuration
    pub fn new(config: &HttpFetcherConfig) -> Result<Self, ScriptError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| ScriptError::Unexpected(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScriptError> {
        let parsed = Url::parse(url).map_err(|e| ScriptError::fetch(url, e))?;
        ::log::info!("Fetching {}", parsed);

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| ScriptError::fetch(url, e))?;

        let status = response.status();
        if !status.is_success() {
            ::log::warn!("Fetching {} returned HTTP {}", url, status);
            return Err(ScriptError::fetch(url, format!("HTTP status {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScriptError::fetch(url, e))?;

        ::log::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
