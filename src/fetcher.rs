use crate::FetchError;
use reqwest::{header::HeaderMap, Client};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, error, instrument};

pub const DEFAULT_PROXY_BASE: &str = "https://corsproxy.io/";
pub const DEFAULT_API_BASE: &str = "https://open-apis.hax.cloud/api/services/website/metadata";

/// Response shape dictated by the metadata service: a single `data` mapping
/// of meta-tag names to heterogeneous values (strings plus a nested
/// `ld+json` object).
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataResponse {
    #[serde(default)]
    pub data: Map<String, Value>,
}

#[derive(Clone)]
pub struct Fetcher {
    client: Client,
    proxy_base: String,
    api_base: String,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    pub fn new() -> Self {
        debug!("Fetcher initialized with default configuration");
        Self::new_with_config(FetcherConfig::default())
    }

    pub fn new_with_config(config: FetcherConfig) -> Self {
        let mut client_builder = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout);

        if let Some(headers) = config.headers {
            client_builder = client_builder.default_headers(headers);
        }

        let client = client_builder.build().unwrap_or_else(|e| {
            error!(error = %e, "Failed to create HTTP client");
            panic!("Failed to initialize HTTP client: {}", e);
        });

        Self {
            client,
            proxy_base: config.proxy_base,
            api_base: config.api_base,
        }
    }

    /// Wraps an existing client for hosts that manage their own connection
    /// pool.
    pub fn with_client(client: Client, config: FetcherConfig) -> Self {
        Self {
            client,
            proxy_base: config.proxy_base,
            api_base: config.api_base,
        }
    }

    /// The proxy relays the metadata API call to dodge cross-origin limits.
    /// The target URL rides in the query string unescaped; the proxy expects
    /// it that way.
    fn request_url(&self, web_link: &str) -> String {
        format!("{}?url={}?q={}", self.proxy_base, self.api_base, web_link)
    }

    #[instrument(level = "debug", skip(self), err)]
    pub async fn fetch_metadata(&self, web_link: &str) -> Result<MetadataResponse, FetchError> {
        let request_url = self.request_url(web_link);
        debug!(url = %request_url, "Requesting metadata from proxy");

        let response = self.client.get(&request_url).send().await.map_err(|e| {
            error!(error = %e, url = %web_link, "Failed to send metadata request");
            FetchError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http(status.as_u16()));
        }

        let metadata: MetadataResponse = response.json().await.map_err(|e| {
            error!(error = %e, url = %web_link, "Failed to decode metadata response");
            FetchError::Parse(e.to_string())
        })?;

        debug!(
            url = %web_link,
            keys = metadata.data.len(),
            "Successfully fetched metadata"
        );
        Ok(metadata)
    }
}

/// Custom fetcher configuration.
///
/// # Examples
/// ```ignore
/// let fetcher = Fetcher::new_with_config(FetcherConfig {
///     proxy_base: "http://localhost:8080/".to_string(),
///     ..FetcherConfig::default()
/// });
/// ```
pub struct FetcherConfig {
    pub proxy_base: String,
    pub api_base: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub headers: Option<HeaderMap>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            proxy_base: DEFAULT_PROXY_BASE.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: "link-preview-card/0.1.0".to_string(),
            timeout: Duration::from_secs(10),
            headers: None,
        }
    }
}
