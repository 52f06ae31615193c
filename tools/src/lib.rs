//! Sprout Social tools for agent hosts
//!
//! This crate exposes the Sprout Social REST API as discrete tools: each
//! operation is a `(Tool, ToolExecutorFn)` pair the dispatch host can
//! register and invoke with string-oriented JSON parameters.
//!
//! ## Design Principles
//!
//! **Total boundary**: every executor terminates with a well-formed JSON
//! string. Handler faults (missing customer context, non-2xx responses,
//! network failures, malformed parameter JSON) are normalized into a
//! structured `{"error": ...}` payload instead of crossing the boundary as
//! raised errors. The one exception is a missing `SPROUT_API_TOKEN`, which
//! fails [`ToolContext::from_env`] at startup, before any call.
//!
//! **Explicit dependencies**: the shared [`SproutClient`] transport is
//! constructed once and injected into each tool constructor; there is no
//! lazily initialized global.
//!
//! ## Modules
//!
//! - `metadata`: customer/profile/tag/group/user/team lookups
//! - `analytics`: profile-level and post-level metric queries
//! - `listening`: listening topics and topic-scoped messages
//! - `messages`: inbound inbox retrieval
//! - `publishing`: create, list, and fetch outbound posts
//! - `boundary`: the error-normalizing executor wrapper
//! - `registry`: tool registry for dynamic tool management
//!
//! ## Example
//!
//! ```no_run
//! use sprout_agent_tools::{ToolContext, ToolRegistry};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let context = ToolContext::from_env()?;
//!     let registry = ToolRegistry::with_sprout_tools(&context);
//!
//!     let result = registry
//!         .execute("list_customers", "{}".to_string())
//!         .await?;
//!     println!("{result}");
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod boundary;
pub mod context;
pub mod listening;
pub mod messages;
pub mod metadata;
pub mod publishing;
pub mod registry;
pub mod tool;

pub use sprout_agent_client::{SproutClient, SproutError};

// Re-export commonly used types
pub use boundary::normalize;
pub use context::ToolContext;
pub use registry::{ToolRegistry, sprout_toolset};
pub use tool::{Tool, ToolError, ToolExecutorFn, ToolFuture, ToolResult};
