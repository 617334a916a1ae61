//! HTTP client for provider and suggestion requests

use anyhow::Result;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;

/// Accept header for JSON APIs
const ACCEPT_JSON: &str = "application/json,text/javascript,*/*;q=0.01";

/// HTTP client wrapper shared read-only across concurrent provider calls
///
/// Wraps one `reqwest::Client` so all providers draw from the same connection
/// pool. Cloning is cheap and shares the pool.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(20)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            user_agent: format!("fathom/{}", crate::VERSION),
        })
    }

    /// Issue a GET with the given headers applied, bounded by `timeout`.
    ///
    /// The timeout covers the whole exchange including body read. Errors are
    /// returned raw so the caller can distinguish timeouts from transport
    /// failures.
    pub async fn get(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        timeout: Duration,
    ) -> Result<HttpResponse, reqwest::Error> {
        let mut req = self
            .client
            .get(url)
            .timeout(timeout)
            .header("User-Agent", &self.user_agent)
            .header("Accept", ACCEPT_JSON);

        for (key, value) in headers {
            req = req.header(key.as_str(), value.as_str());
        }

        let response = req.send().await?;
        Self::parse_response(response).await
    }

    /// GET with query parameters, used by the suggestion backends.
    pub async fn get_with_params(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<HttpResponse, reqwest::Error> {
        let response = self
            .client
            .get(url)
            .query(params)
            .timeout(Duration::from_secs(crate::DEFAULT_TIMEOUT))
            .header("User-Agent", &self.user_agent)
            .header("Accept", ACCEPT_JSON)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn parse_response(response: reqwest::Response) -> Result<HttpResponse, reqwest::Error> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response.text().await?;

        Ok(HttpResponse { status, text, url })
    }

    /// Current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Response from a provider request
#[derive(Debug)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl HttpResponse {
    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
