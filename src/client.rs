use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde_json::Value;

use crate::config::WeatherConfig;
use crate::constants::ACCEPT_GEO_JSON;
use crate::error::FetchError;

/// Source of decoded JSON documents.
///
/// Any failure is reported as `None`; callers only ever see "a body" or
/// "nothing".
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// GETs `url` and decodes the body. `headers` override the defaults.
    async fn get_json(&self, url: &str, headers: Option<HeaderMap>) -> Option<Value>;
}

/// HTTP client for the National Weather Service API
#[derive(Debug, Clone)]
pub struct NwsClient {
    client: Client,
}

impl NwsClient {
    /// Creates a client carrying the configured user agent, the geo+json
    /// accept header and the request timeout
    pub fn new(config: &WeatherConfig) -> Result<Self, FetchError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_GEO_JSON));

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(default_headers)
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Build)?;

        Ok(Self { client })
    }

    /// Makes an HTTP GET request and decodes the JSON response
    async fn request(&self, url: &str, headers: Option<HeaderMap>) -> Result<Value, FetchError> {
        let mut request = self.client.get(url);
        if let Some(headers) = headers {
            request = request.headers(headers);
        }

        let response = request.send().await.map_err(FetchError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(FetchError::from_reqwest)
    }
}

#[async_trait]
impl JsonFetcher for NwsClient {
    async fn get_json(&self, url: &str, headers: Option<HeaderMap>) -> Option<Value> {
        tracing::debug!(%url, "Fetching");

        match self.request(url, headers).await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::error!("Error fetching {}: {}", url, e);
                None
            }
        }
    }
}
