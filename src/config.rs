use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for the plain HTTP fetcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpFetcherConfig {
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Optional request timeout in seconds (no timeout when unset)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Configuration for fetching rendered pages through a WebDriver server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebDriverFetcherConfig {
    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Optional page load timeout in seconds (no timeout when unset)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Enum containing all fetcher configuration types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FetcherConfig {
    /// Fetch raw HTML over HTTP
    Http(HttpFetcherConfig),

    /// Fetch the page source from a browser driven over WebDriver
    WebDriver(WebDriverFetcherConfig),
}

/// Fallback values used when a request leaves a field empty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateDefaults {
    #[serde(default = "default_audience")]
    pub audience: String,

    #[serde(default = "default_goal")]
    pub goal: String,

    #[serde(default = "default_tone")]
    pub tone: String,

    /// Name used when neither the request nor the page provides one
    #[serde(default = "default_company_name")]
    pub company_name: String,
}

/// Top level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptConfig {
    /// How pages are retrieved when a URL is given
    #[serde(default)]
    pub fetcher: FetcherConfig,

    /// Template fallbacks
    #[serde(default)]
    pub defaults: TemplateDefaults,

    /// Address the HTTP server binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl ScriptConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let mut config: Self = serde_json::from_str(json)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Override the WebDriver URL with the WEBDRIVER_URL environment variable if provided
    pub fn apply_env_overrides(&mut self) {
        if let FetcherConfig::WebDriver(cfg) = &mut self.fetcher {
            if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
                if !webdriver_url.is_empty() {
                    ::log::debug!("Using WebDriver URL from environment: {}", webdriver_url);
                    cfg.webdriver_url = webdriver_url;
                }
            }
        }
    }
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            fetcher: FetcherConfig::default(),
            defaults: TemplateDefaults::default(),
            bind_address: default_bind_address(),
        }
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        FetcherConfig::Http(HttpFetcherConfig::default())
    }
}

impl Default for HttpFetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

impl Default for WebDriverFetcherConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            timeout_secs: None,
        }
    }
}

impl Default for TemplateDefaults {
    fn default() -> Self {
        Self {
            audience: default_audience(),
            goal: default_goal(),
            tone: default_tone(),
            company_name: default_company_name(),
        }
    }
}

/// Default value for user_agent
fn default_user_agent() -> String {
    concat!("site-scripts/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_audience() -> String {
    "busy decision-makers".to_string()
}

fn default_goal() -> String {
    "learn more".to_string()
}

fn default_tone() -> String {
    "clear, friendly, confident".to_string()
}

fn default_company_name() -> String {
    "Your Company".to_string()
}

/// Default value for bind_address
fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}
