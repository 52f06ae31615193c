//! Tool surface types consumed by the external dispatch host
//!
//! A tool is a `Tool` definition (name, description, JSON schema for its
//! parameters) paired with an async executor that takes the raw parameter
//! JSON as a string and always terminates with a string result.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Tool definition following the host's registration schema
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Tool {
    /// Tool name (used to identify which tool to call)
    pub name: String,
    /// Human-readable description of what the tool does
    pub description: String,
    /// JSON schema for the tool's input parameters
    pub input_schema: serde_json::Value,
}

/// Result from tool execution
pub type ToolResult = Result<String, ToolError>;

/// Tool execution errors
///
/// Sprout tool executors never return this across the boundary: all
/// handler faults are normalized to JSON error payloads first. It remains
/// in the signature because the registry interface is shared with the host.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ToolError {
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ToolError {}

/// Boxed future returned by a tool executor
pub type ToolFuture = Pin<Box<dyn Future<Output = ToolResult> + Send>>;

/// Async executor invoked by the host with raw JSON input
pub type ToolExecutorFn = Arc<dyn Fn(String) -> ToolFuture + Send + Sync>;
