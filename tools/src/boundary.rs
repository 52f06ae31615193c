//! The error-normalizing tool boundary
//!
//! Every Sprout tool executor runs its handler through [`normalize`], so an
//! invocation always terminates with a well-formed JSON string: either the
//! platform's response pretty-printed, or a structured error payload.
//! Nothing raised inside a handler crosses the tool boundary.

use crate::context::ToolContext;
use crate::tool::{ToolExecutorFn, ToolFuture};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use sprout_agent_client::SproutError;
use std::future::Future;
use std::sync::Arc;

/// Collapse a handler outcome into the boundary's string form.
///
/// Success pretty-prints the platform response. An HTTP status error keeps
/// its status, URL, and response detail; every other fault is reported by
/// kind name and message. The output is always parseable JSON with an
/// `error` key on the failure side.
#[must_use]
pub fn normalize(result: Result<Value, SproutError>) -> String {
    let payload = match result {
        Ok(value) => value,
        Err(SproutError::Api {
            status,
            url,
            detail,
        }) => json!({
            "error": format!("HTTP {status}"),
            "url": url,
            "detail": detail,
        }),
        Err(other) => json!({
            "error": other.kind(),
            "message": other.to_string(),
        }),
    };
    serde_json::to_string_pretty(&payload).unwrap_or_else(|_| {
        r#"{"error":"SerializationError","message":"result could not be serialized"}"#.to_string()
    })
}

/// Parse tool input JSON into a parameter struct.
///
/// Empty input is treated as `{}` so parameterless tools accept a blank
/// invocation.
///
/// # Errors
///
/// Returns `SproutError::InvalidInput` when the input is not valid JSON or
/// is missing required fields.
pub fn parse_params<P: DeserializeOwned>(input: &str) -> Result<P, SproutError> {
    let input = if input.trim().is_empty() { "{}" } else { input };
    serde_json::from_str(input).map_err(|e| SproutError::InvalidInput(format!("input JSON: {e}")))
}

/// Build a tool executor that parses parameters, runs the handler, and
/// normalizes the outcome. The returned executor never yields `Err`.
pub(crate) fn normalized_executor<P, F, Fut>(context: &ToolContext, handler: F) -> ToolExecutorFn
where
    P: DeserializeOwned + Send + 'static,
    F: Fn(ToolContext, P) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<Value, SproutError>> + Send + 'static,
{
    let context = context.clone();
    Arc::new(move |input: String| {
        let context = context.clone();
        let handler = handler.clone();
        Box::pin(async move {
            let result = match parse_params::<P>(&input) {
                Ok(params) => handler(context, params).await,
                Err(e) => Err(e),
            };
            Ok(normalize(result))
        }) as ToolFuture
    })
}
