pub mod http;
pub mod webdriver;

use crate::config::FetcherConfig;
use crate::error::ScriptError;
use std::future::Future;

pub use http::HttpFetcher;
pub use webdriver::WebDriverFetcher;

// Base trait for anything that can turn a URL into page source
pub trait Fetcher {
    /// Retrieve the body of the page at `url`
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, ScriptError>> + Send;
}

/// Fetcher selected from configuration
#[derive(Debug, Clone)]
pub enum PageFetcher {
    /// Plain HTTP GET
    Http(HttpFetcher),
    /// Rendered source from a WebDriver session
    WebDriver(WebDriverFetcher),
}

impl PageFetcher {
    /// Build the fetcher described by the configuration
    pub fn from_config(config: &FetcherConfig) -> Result<Self, ScriptError> {
        match config {
            FetcherConfig::Http(cfg) => Ok(PageFetcher::Http(HttpFetcher::new(cfg)?)),
            FetcherConfig::WebDriver(cfg) => Ok(PageFetcher::WebDriver(WebDriverFetcher::new(cfg))),
        }
    }
}

impl Fetcher for PageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScriptError> {
        match self {
            PageFetcher::Http(fetcher) => fetcher.fetch(url).await,
            PageFetcher::WebDriver(fetcher) => fetcher.fetch(url).await,
        }
    }
}
