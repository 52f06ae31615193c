//! Typed request bodies for the Sprout Social POST endpoints
//!
//! Optional fields are skipped entirely when unset; the platform rejects
//! explicit nulls and empty strings in several of these positions.

use serde::Serialize;

/// Body for `POST /v1/{customer}/analytics/profiles` and
/// `POST /v1/{customer}/analytics/posts`
#[derive(Clone, Debug, Serialize)]
pub struct AnalyticsQuery {
    /// Rendered filter expressions, in order
    pub filters: Vec<String>,
    /// Metric names to aggregate
    pub metrics: Vec<String>,
    /// Report timezone (e.g. `UTC`, `America/Chicago`)
    pub timezone: String,
    /// Result cap; only the posts endpoint accepts one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Body for `POST /v1/{customer}/messages` (inbound inbox)
#[derive(Clone, Debug, Serialize)]
pub struct MessagesQuery {
    /// Rendered filter expressions, in order
    pub filters: Vec<String>,
    /// Result cap, passed through unclamped
    pub limit: u32,
    /// Opaque pagination token from a prior response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_cursor: Option<String>,
}

/// Body for `POST /v1/{customer}/listening/topics/{topic}/messages`
///
/// Note the pagination field here is `cursor`, not `page_cursor`; the
/// naming split between endpoints is platform-mandated.
#[derive(Clone, Debug, Serialize)]
pub struct ListeningQuery {
    /// Rendered filter expressions, in order
    pub filters: Vec<String>,
    /// Result cap, passed through unclamped
    pub limit: u32,
    /// `field:direction` sort keys
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<String>>,
    /// Response field projection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    /// Opaque pagination token from a prior response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// Body for `POST /v1/{customer}/publishing/posts` when listing
#[derive(Clone, Debug, Serialize)]
pub struct PublishingQuery {
    /// Rendered filter expressions, in order
    pub filters: Vec<String>,
    /// Result cap, passed through unclamped
    pub limit: u32,
    /// Opaque pagination token from a prior response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_cursor: Option<String>,
}

/// Body for `POST /v1/{customer}/publishing/posts` when creating a post
#[derive(Clone, Debug, Serialize)]
pub struct NewPost {
    /// Always `OUTBOUND`
    pub post_type: String,
    /// Target profile ids
    pub profile_ids: Vec<String>,
    /// Post content
    pub fields: PostFields,
    /// Publish time; absent means the post is saved as a draft
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_send_time: Option<String>,
}

/// Content fields of a new publishing post
#[derive(Clone, Debug, Serialize)]
pub struct PostFields {
    /// Post body text
    pub text: String,
}
