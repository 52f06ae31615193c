//! Error types for the Sprout Social API client

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when interacting with the Sprout Social API
#[derive(Debug, Error)]
pub enum SproutError {
    /// Missing `SPROUT_API_TOKEN` environment variable
    #[error("Missing SPROUT_API_TOKEN environment variable")]
    MissingApiToken,

    /// No customer id supplied and no process-wide default configured
    #[error("customer_id is required. Pass it explicitly or set SPROUT_CUSTOMER_ID")]
    MissingCustomerId,

    /// API returned a non-success status
    #[error("API error (status {status}) for {url}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Full request URL
        url: String,
        /// Response body, JSON-parsed when possible, else the raw text
        detail: Value,
    },

    /// HTTP request failed before a response arrived
    #[error("Request failed: {0}")]
    Request(String),

    /// Response body could not be decoded as JSON
    #[error("Response parsing failed: {0}")]
    ResponseParse(String),

    /// Tool input was not valid parameter JSON
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SproutError {
    /// Stable kind name for this error, used in normalized error payloads.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingApiToken => "MissingApiToken",
            Self::MissingCustomerId => "MissingCustomerId",
            Self::Api { .. } => "ApiError",
            Self::Request(_) => "RequestError",
            Self::ResponseParse(_) => "ResponseParseError",
            Self::InvalidInput(_) => "InvalidInput",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_names_are_stable() {
        assert_eq!(SproutError::MissingApiToken.kind(), "MissingApiToken");
        assert_eq!(SproutError::MissingCustomerId.kind(), "MissingCustomerId");
        let api = SproutError::Api {
            status: 404,
            url: "https://api.sproutsocial.com/v1/x".to_string(),
            detail: json!({"message": "not found"}),
        };
        assert_eq!(api.kind(), "ApiError");
        assert_eq!(SproutError::Request("boom".to_string()).kind(), "RequestError");
    }

    #[test]
    fn test_display_includes_status_and_url() {
        let api = SproutError::Api {
            status: 500,
            url: "https://api.sproutsocial.com/v1/x".to_string(),
            detail: Value::Null,
        };
        let rendered = api.to_string();
        assert!(rendered.contains("500"));
        assert!(rendered.contains("/v1/x"));
    }
}
