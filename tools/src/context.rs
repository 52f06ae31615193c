//! Shared per-process context injected into every tool
//!
//! The transport is constructed once and handed to each tool constructor
//! explicitly; there is no hidden global client.

use sprout_agent_client::{SproutClient, SproutError};
use std::sync::Arc;

/// Dependencies shared by all Sprout tools
#[derive(Clone)]
pub struct ToolContext {
    /// Shared transport; cheap to clone, no per-call mutable state
    pub client: Arc<SproutClient>,
    /// Default customer id used when a call supplies none
    pub default_customer_id: Option<String>,
}

impl ToolContext {
    /// Create a context with an explicit client and optional default
    /// customer id
    #[must_use]
    pub fn new(client: SproutClient, default_customer_id: Option<String>) -> Self {
        Self {
            client: Arc::new(client),
            default_customer_id,
        }
    }

    /// Create a context from the environment
    ///
    /// Reads `SPROUT_API_TOKEN` (required) and `SPROUT_CUSTOMER_ID`
    /// (optional default customer).
    ///
    /// # Errors
    ///
    /// Returns `SproutError::MissingApiToken` if the token variable is not
    /// set or is empty; this is the one fault that escapes the per-call
    /// normalizer, surfacing at startup instead.
    pub fn from_env() -> Result<Self, SproutError> {
        let client = SproutClient::from_env()?;
        let default_customer_id = std::env::var("SPROUT_CUSTOMER_ID")
            .ok()
            .filter(|id| !id.is_empty());
        Ok(Self::new(client, default_customer_id))
    }

    /// Resolve the customer id for a call: explicit parameter wins, else
    /// the process-wide default.
    ///
    /// # Errors
    ///
    /// Returns `SproutError::MissingCustomerId` when neither is available,
    /// so a customer-scoped path is never built from an empty id.
    pub fn resolve_customer(&self, explicit: &str) -> Result<String, SproutError> {
        if !explicit.is_empty() {
            return Ok(explicit.to_string());
        }
        self.default_customer_id
            .clone()
            .ok_or(SproutError::MissingCustomerId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(default: Option<&str>) -> ToolContext {
        ToolContext::new(
            SproutClient::new("test-token".to_string()),
            default.map(ToString::to_string),
        )
    }

    #[test]
    fn test_explicit_customer_wins_over_default() {
        let ctx = context(Some("999"));
        assert_eq!(ctx.resolve_customer("123").expect("resolves"), "123");
    }

    #[test]
    fn test_default_customer_used_when_parameter_empty() {
        let ctx = context(Some("999"));
        assert_eq!(ctx.resolve_customer("").expect("resolves"), "999");
    }

    #[test]
    fn test_missing_customer_is_an_error() {
        let ctx = context(None);
        let error = ctx.resolve_customer("").expect_err("should fail");
        assert_eq!(error.kind(), "MissingCustomerId");
    }
}
