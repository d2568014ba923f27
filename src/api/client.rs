//! Thin reqwest wrapper with base URL, timeout, and bearer token handling

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client for the quant platform HTTP API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

/// Minimal error envelope used when the server responds with a non-2xx status
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiClient {
    /// Create a client from the API configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client for a base URL with default settings
    pub fn from_base_url(base_url: &str) -> Result<Self> {
        Self::new(&ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a JSON body, decoding a JSON response
    pub async fn post_json<B, R>(&self, path: &str, body: &B, token: Option<&str>) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let mut request = self.http.post(self.url(path)).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        Self::decode(response).await
    }

    /// GET a JSON response
    pub async fn get_json<R>(&self, path: &str, token: Option<&str>) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let mut request = self.http.get(self.url(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        Self::decode(response).await
    }

    /// Decode a 2xx body, or surface the server's message for other statuses
    async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> Result<R> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<R>().await?);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("Request failed with status {}", status));

        Err(Error::Rejected(message))
    }
}
