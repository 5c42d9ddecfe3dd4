use crate::config::WebDriverFetcherConfig;
use crate::error::ScriptError;
use crate::fetchers::Fetcher;
use fantoccini::{Client, ClientBuilder};
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

/// Common local WebDriver addresses tried when the configured one is unreachable
const FALLBACK_WEBDRIVER_URLS: [&str; 4] = [
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4723", // Appium default
    "http://localhost:9222", // Chrome debug port default
    "http://127.0.0.1:4444", // Try with IP instead of localhost
];

/// Fetches the rendered page source through a WebDriver server (e.g. ChromeDriver)
///
/// Useful for sites that build their copy with JavaScript. A session is opened
/// per fetch and closed once the source has been read.
#[derive(Debug, Clone)]
pub struct WebDriverFetcher {
    webdriver_url: String,
    timeout: Option<Duration>,
}

impl WebDriverFetcher {
    /// Create a fetcher from configuration
    pub fn new(config: &WebDriverFetcherConfig) -> Self {
        Self {
            webdriver_url: config.webdriver_url.clone(),
            timeout: config.timeout_secs.map(Duration::from_secs),
        }
    }

    /// WebDriver addresses in the order they are tried
    pub fn candidate_urls(&self) -> Vec<&str> {
        let mut urls = vec![self.webdriver_url.as_str()];
        urls.extend(
            FALLBACK_WEBDRIVER_URLS
                .iter()
                .copied()
                .filter(|url| *url != self.webdriver_url),
        );
        urls
    }

    /// Connects to the WebDriver instance, trying the fallbacks on failure
    async fn connect(&self, url: &str) -> Result<Client, ScriptError> {
        let mut last_error = None;

        for (attempt, webdriver_url) in self.candidate_urls().into_iter().enumerate() {
            if attempt > 0 {
                ::log::info!("Trying fallback WebDriver URL: {}", webdriver_url);
            }
            match ClientBuilder::native().connect(webdriver_url).await {
                Ok(client) => {
                    ::log::debug!("Connected to WebDriver at {}", webdriver_url);
                    return Ok(client);
                }
                Err(e) => {
                    if attempt == 0 {
                        ::log::error!(
                            "Failed to connect to WebDriver at {}: {}",
                            webdriver_url,
                            e
                        );
                    }
                    last_error = Some(e.to_string());
                }
            }
        }

        ::log::error!(
            "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
        );
        Err(connection_error(url, last_error))
    }

    /// Navigates to the URL and reads the page source
    async fn scrape(client: &Client, url: &str) -> Result<String, ScriptError> {
        client
            .goto(url)
            .await
            .map_err(|e| navigation_error(e, "accessing", url))?;

        client
            .source()
            .await
            .map_err(|e| navigation_error(e, "getting source for", url))
    }
}

impl Fetcher for WebDriverFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScriptError> {
        Url::parse(url).map_err(|e| ScriptError::fetch(url, e))?;

        let started = std::time::Instant::now();
        let client = self.connect(url).await?;

        let result = match self.timeout {
            Some(limit) => match timeout(limit, Self::scrape(&client, url)).await {
                Ok(result) => result,
                Err(_) => {
                    ::log::error!("Timeout scraping: {}", url);
                    Err(ScriptError::fetch(url, "timed out loading page"))
                }
            },
            None => Self::scrape(&client, url).await,
        };

        if let Err(e) = client.close().await {
            ::log::warn!("Failed to close WebDriver client: {}", e);
        }

        ::log::debug!(
            "Scraped {} in {:.2} seconds",
            url,
            started.elapsed().as_secs_f64()
        );
        result
    }
}

/// Fetch error for a page that could not be loaded because no WebDriver server answered
fn connection_error(url: &str, last_error: Option<String>) -> ScriptError {
    ScriptError::fetch(
        url,
        format!(
            "failed to connect to any WebDriver server: {}",
            last_error.unwrap_or_default()
        ),
    )
}

/// Converts a navigation failure into a fetch error
fn navigation_error(error: fantoccini::error::CmdError, context: &str, url: &str) -> ScriptError {
    if error.to_string().contains("Unable to find session") {
        ::log::warn!("Lost WebDriver session while {} {}", context, url);
    } else {
        ::log::error!("Failed {} {}: {}", context, url, error);
    }
    ScriptError::fetch(url, error)
}
