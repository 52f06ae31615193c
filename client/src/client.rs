//! Sprout Social API transport

use crate::error::SproutError;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Production API endpoint
pub const BASE_URL: &str = "https://api.sproutsocial.com";

/// Fixed per-request timeout; there is no retry or backoff on top of it.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Sprout Social API client
///
/// Holds the bearer token and a reqwest client; cheap to clone and safe to
/// share across concurrent tool invocations (no per-call mutable state).
#[derive(Clone)]
pub struct SproutClient {
    client: Client,
    token: String,
    base_url: String,
}

impl SproutClient {
    /// Create a new client with the token from the environment
    ///
    /// # Errors
    ///
    /// Returns `SproutError::MissingApiToken` if `SPROUT_API_TOKEN` is not
    /// set or is empty. This is checked at construction, before any network
    /// call.
    pub fn from_env() -> Result<Self, SproutError> {
        let token = std::env::var("SPROUT_API_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or(SproutError::MissingApiToken)?;

        Ok(Self::new(token))
    }

    /// Create a new client with an explicit bearer token
    #[must_use]
    pub fn new(token: String) -> Self {
        Self {
            client: Client::new(),
            token,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Override the base URL (test servers)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Issue an authenticated GET
    ///
    /// `query` pairs are appended as a query string when present.
    ///
    /// # Errors
    ///
    /// Returns `SproutError::Api` for non-2xx responses, `Request` for
    /// transport failures, and `ResponseParse` if the body is not JSON.
    pub async fn get(
        &self,
        path: &str,
        query: Option<&[(&str, &str)]>,
    ) -> Result<Value, SproutError> {
        let url = format!("{}{path}", self.base_url);
        let mut request = self.client.get(&url);
        if let Some(pairs) = query {
            request = request.query(pairs);
        }
        self.dispatch(request, &url).await
    }

    /// Issue an authenticated POST with a JSON body
    ///
    /// # Errors
    ///
    /// Returns `SproutError::Api` for non-2xx responses, `Request` for
    /// transport failures, and `ResponseParse` if the body is not JSON.
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Value, SproutError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{path}", self.base_url);
        let request = self.client.post(&url).json(body);
        self.dispatch(request, &url).await
    }

    async fn dispatch(&self, request: RequestBuilder, url: &str) -> Result<Value, SproutError> {
        let response = request
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| SproutError::Request(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "sprout request succeeded");
            response
                .json::<Value>()
                .await
                .map_err(|e| SproutError::ResponseParse(e.to_string()))
        } else {
            let text = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<Value>(&text)
                .unwrap_or_else(|_| Value::String(text));
            tracing::debug!(%url, status = status.as_u16(), "sprout request failed");
            Err(SproutError::Api {
                status: status.as_u16(),
                url: url.to_string(),
                detail,
            })
        }
    }
}
