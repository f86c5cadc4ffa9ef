use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};

use crate::config::Config;
use crate::error::Result;

pub const ANALYZER_PATH: &str = "/sentimentAnalyzer";
pub const QUERY_PARAM: &str = "textToAnalyze";

/// Status and raw body of one endpoint reply. The body is display text and is never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResponse {
    pub status: u16,
    pub body: String,
}

impl EndpointResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outbound seam for the sentiment-analysis backend.
///
/// `Err` is reserved for transport failures. Any HTTP status, including
/// 4xx/5xx, is an `Ok` response.
#[async_trait]
pub trait SentimentEndpoint: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<EndpointResponse>;
}

pub struct HttpEndpoint {
    client: Client,
    base_url: String,
}

impl HttpEndpoint {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_connect_timeout(base_url, Duration::from_secs(crate::config::DEFAULT_CONNECT_TIMEOUT_SECS))
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_connect_timeout(config.api_url.clone(), config.connect_timeout)
    }

    fn with_connect_timeout(base_url: impl Into<String>, connect_timeout: Duration) -> Result<Self> {
        // Only the connect phase is bounded; the response itself may take as long as it takes.
        let client = ClientBuilder::new()
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(HttpEndpoint {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn request_url(&self, text: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!(
            "{}{}?{}={}",
            base,
            ANALYZER_PATH,
            QUERY_PARAM,
            urlencoding::encode(text)
        )
    }
}

#[async_trait]
impl SentimentEndpoint for HttpEndpoint {
    async fn analyze(&self, text: &str) -> Result<EndpointResponse> {
        let url = self.request_url(text);
        log::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        log::debug!("Endpoint replied {} ({} bytes)", status, body.len());
        Ok(EndpointResponse { status, body })
    }
}
