//! # Sprout Social API Client
//!
//! Rust client library for the Sprout Social REST API: authenticated
//! transport, the platform's filter-expression syntax, and typed request
//! bodies for the analytics, listening, messages, and publishing endpoints.
//!
//! ## Example
//!
//! ```no_run
//! use sprout_agent_client::{AnalyticsQuery, Filter, FilterSet, SproutClient, split_csv};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client from SPROUT_API_TOKEN environment variable
//!     let client = SproutClient::from_env()?;
//!
//!     let mut filters = FilterSet::new();
//!     filters.push(Filter::equals("customer_profile_id", split_csv("1,2")));
//!     filters.push(Filter::reporting_period("reporting_period", "2024-01-01", "2024-01-31"));
//!
//!     let body = AnalyticsQuery {
//!         filters: filters.render(),
//!         metrics: split_csv("impressions,engagements"),
//!         timezone: "UTC".to_string(),
//!         limit: None,
//!     };
//!
//!     let response = client.post("/v1/12345/analytics/profiles", &body).await?;
//!     println!("{response}");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - Bearer-token transport with fixed timeout and structured HTTP errors
//! - Data-first filter expressions rendered to `field.op(operands)` strings
//! - Per-endpoint range separators (`..` for time ranges, `...` for
//!   reporting periods), matching the platform's own syntax split
//! - Typed request bodies that omit optional fields entirely when unset

pub mod client;
pub mod error;
pub mod filters;
pub mod types;

// Re-export main types for convenience
pub use client::{BASE_URL, SproutClient};
pub use error::SproutError;
pub use filters::{Filter, FilterSet, RangeSeparator, date_only, split_csv};
pub use types::{
    AnalyticsQuery, ListeningQuery, MessagesQuery, NewPost, PostFields, PublishingQuery,
};
