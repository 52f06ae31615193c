//! Tool registry consumed by the dispatch host
//!
//! Thread-safe storage of tool definitions and executors, plus
//! [`sprout_toolset`] which builds the full Sprout tool suite against one
//! shared context.

use crate::analytics::{get_post_analytics_tool, get_profile_analytics_tool};
use crate::context::ToolContext;
use crate::listening::{get_listening_messages_tool, list_listening_topics_tool};
use crate::messages::get_messages_tool;
use crate::metadata::{
    list_customers_tool, list_groups_tool, list_profiles_tool, list_tags_tool, list_teams_tool,
    list_users_tool,
};
use crate::publishing::{create_post_tool, get_publishing_post_tool, list_publishing_posts_tool};
use crate::tool::{Tool, ToolError, ToolExecutorFn, ToolResult};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Every Sprout tool, built against the given context.
///
/// The order matches the capability areas: metadata, analytics, listening,
/// messages, publishing.
#[must_use]
pub fn sprout_toolset(context: &ToolContext) -> Vec<(Tool, ToolExecutorFn)> {
    vec![
        list_customers_tool(context),
        list_profiles_tool(context),
        list_tags_tool(context),
        list_groups_tool(context),
        list_users_tool(context),
        list_teams_tool(context),
        get_profile_analytics_tool(context),
        get_post_analytics_tool(context),
        list_listening_topics_tool(context),
        get_listening_messages_tool(context),
        get_messages_tool(context),
        create_post_tool(context),
        list_publishing_posts_tool(context),
        get_publishing_post_tool(context),
    ]
}

/// Thread-safe tool registry
///
/// Stores tools and their executors for execution by name. The registry
/// itself carries no per-call state; executors own their dependencies.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Arc<RwLock<HashMap<String, (Tool, ToolExecutorFn)>>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-loaded with the full Sprout tool suite
    #[must_use]
    pub fn with_sprout_tools(context: &ToolContext) -> Self {
        let registry = Self::new();
        for (tool, executor) in sprout_toolset(context) {
            registry.register(tool, executor);
        }
        registry
    }

    /// Register a tool with its executor
    ///
    /// Returns `true` if a tool with the same name was replaced.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (indicates a panic in
    /// another thread)
    #[allow(clippy::expect_used)]
    pub fn register(&self, tool: Tool, executor: ToolExecutorFn) -> bool {
        let mut tools = self
            .tools
            .write()
            .expect("Tool registry lock poisoned - indicates a panic in another thread");
        tools.insert(tool.name.clone(), (tool, executor)).is_some()
    }

    /// Execute a tool by name
    ///
    /// # Errors
    ///
    /// Returns `ToolError` only when no tool with that name is registered;
    /// Sprout executors themselves always resolve to `Ok` with either the
    /// platform response or a normalized error payload.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (indicates a panic in
    /// another thread)
    #[allow(clippy::expect_used)]
    pub async fn execute(&self, name: &str, input: String) -> ToolResult {
        // Get executor (release lock before awaiting)
        let executor = {
            let tools = self
                .tools
                .read()
                .expect("Tool registry lock poisoned - indicates a panic in another thread");
            tools.get(name).map(|(_, executor)| executor.clone())
        };

        match executor {
            Some(executor) => {
                tracing::debug!(tool = %name, "executing tool");
                executor(input).await
            }
            None => Err(ToolError {
                message: format!("Tool not found: {name}"),
            }),
        }
    }

    /// Get a list of all registered tool names, sorted alphabetically
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (indicates a panic in
    /// another thread)
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn list_tools(&self) -> Vec<String> {
        let tools = self
            .tools
            .read()
            .expect("Tool registry lock poisoned - indicates a panic in another thread");
        let mut names: Vec<String> = tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get all registered tool definitions (for advertising to the host),
    /// sorted by name
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (indicates a panic in
    /// another thread)
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn get_tools(&self) -> Vec<Tool> {
        let tools = self
            .tools
            .read()
            .expect("Tool registry lock poisoned - indicates a panic in another thread");
        let mut definitions: Vec<Tool> = tools.values().map(|(tool, _)| tool.clone()).collect();
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        definitions
    }

    /// Get a single tool definition by name
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (indicates a panic in
    /// another thread)
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn get_tool(&self, name: &str) -> Option<Tool> {
        let tools = self
            .tools
            .read()
            .expect("Tool registry lock poisoned - indicates a panic in another thread");
        tools.get(name).map(|(tool, _)| tool.clone())
    }

    /// Number of registered tools
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned (indicates a panic in
    /// another thread)
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn count(&self) -> usize {
        let tools = self
            .tools
            .read()
            .expect("Tool registry lock poisoned - indicates a panic in another thread");
        tools.len()
    }
}
