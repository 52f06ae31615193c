//! Analytics tools: profile-level and post-level metric queries
//!
//! Both endpoints POST a filter list plus metric names. Note the range
//! separators differ: reporting periods use `...` with date-only bounds,
//! post time ranges use `..` with full timestamps.

use crate::boundary::normalized_executor;
use crate::context::ToolContext;
use crate::tool::{Tool, ToolExecutorFn};
use serde::Deserialize;
use serde_json::{Value, json};
use sprout_agent_client::{AnalyticsQuery, Filter, FilterSet, SproutError, date_only, split_csv};

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_profile_metrics() -> String {
    "impressions,engagements,net_follower_growth".to_string()
}

fn default_post_metrics() -> String {
    "impressions,engagements,clicks".to_string()
}

fn default_post_limit() -> u32 {
    50
}

#[derive(Debug, Deserialize)]
struct ProfileAnalyticsParams {
    profile_ids: String,
    start_time: String,
    end_time: String,
    #[serde(default = "default_profile_metrics")]
    metrics: String,
    #[serde(default = "default_timezone")]
    timezone: String,
    #[serde(default)]
    customer_id: String,
}

async fn profile_analytics(
    context: ToolContext,
    params: ProfileAnalyticsParams,
) -> Result<Value, SproutError> {
    let customer = context.resolve_customer(&params.customer_id)?;

    let mut filters = FilterSet::new();
    filters.push(Filter::equals(
        "customer_profile_id",
        split_csv(&params.profile_ids),
    ));
    filters.push(Filter::reporting_period(
        "reporting_period",
        date_only(&params.start_time),
        date_only(&params.end_time),
    ));

    let body = AnalyticsQuery {
        filters: filters.render(),
        metrics: split_csv(&params.metrics),
        timezone: params.timezone,
        limit: None,
    };
    context
        .client
        .post(&format!("/v1/{customer}/analytics/profiles"), &body)
        .await
}

/// Create the `get_profile_analytics` tool
///
/// Metrics aggregated by social profile over a reporting period.
#[must_use]
pub fn get_profile_analytics_tool(context: &ToolContext) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "get_profile_analytics".to_string(),
        description: "Get analytics metrics aggregated by social profile.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "profile_ids": {
                    "type": "string",
                    "description": "Comma-separated Sprout profile IDs."
                },
                "start_time": {
                    "type": "string",
                    "description": "Start of period (ISO 8601, e.g. '2024-01-01T00:00:00')."
                },
                "end_time": {
                    "type": "string",
                    "description": "End of period (ISO 8601, e.g. '2024-01-31T23:59:59')."
                },
                "metrics": {
                    "type": "string",
                    "description": "Comma-separated metric names. Common options: impressions, \
                                    engagements, net_follower_growth, engagement_rate, video_views, \
                                    reactions, comments, shares, clicks. Defaults to \
                                    'impressions,engagements,net_follower_growth'."
                },
                "timezone": {
                    "type": "string",
                    "description": "Timezone for the report (e.g. 'America/Chicago'). Default: UTC."
                },
                "customer_id": {
                    "type": "string",
                    "description": "Sprout customer ID. Defaults to the SPROUT_CUSTOMER_ID env var."
                }
            },
            "required": ["profile_ids", "start_time", "end_time"]
        }),
    };
    let executor = normalized_executor(context, profile_analytics);
    (tool, executor)
}

#[derive(Debug, Deserialize)]
struct PostAnalyticsParams {
    profile_ids: String,
    start_time: String,
    end_time: String,
    #[serde(default = "default_post_metrics")]
    metrics: String,
    #[serde(default = "default_timezone")]
    timezone: String,
    #[serde(default = "default_post_limit")]
    limit: u32,
    #[serde(default)]
    customer_id: String,
}

async fn post_analytics(
    context: ToolContext,
    params: PostAnalyticsParams,
) -> Result<Value, SproutError> {
    let customer = context.resolve_customer(&params.customer_id)?;

    let mut filters = FilterSet::new();
    filters.push(Filter::equals(
        "customer_profile_id",
        split_csv(&params.profile_ids),
    ));
    filters.push(Filter::time_range(
        "created_time",
        &params.start_time,
        &params.end_time,
    ));

    let body = AnalyticsQuery {
        filters: filters.render(),
        metrics: split_csv(&params.metrics),
        timezone: params.timezone,
        limit: Some(params.limit),
    };
    context
        .client
        .post(&format!("/v1/{customer}/analytics/posts"), &body)
        .await
}

/// Create the `get_post_analytics` tool
///
/// Metrics for individual posts created inside a time range.
#[must_use]
pub fn get_post_analytics_tool(context: &ToolContext) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "get_post_analytics".to_string(),
        description: "Get analytics metrics for individual posts.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "profile_ids": {
                    "type": "string",
                    "description": "Comma-separated Sprout profile IDs."
                },
                "start_time": {
                    "type": "string",
                    "description": "Start of period (ISO 8601)."
                },
                "end_time": {
                    "type": "string",
                    "description": "End of period (ISO 8601)."
                },
                "metrics": {
                    "type": "string",
                    "description": "Comma-separated metric names. Common options: impressions, \
                                    engagements, clicks, reactions, comments, shares, video_views. \
                                    Defaults to 'impressions,engagements,clicks'."
                },
                "timezone": {
                    "type": "string",
                    "description": "Timezone for the report. Default: UTC."
                },
                "limit": {
                    "type": "integer",
                    "description": "Number of posts to return (default 50, max enforced remotely)."
                },
                "customer_id": {
                    "type": "string",
                    "description": "Sprout customer ID. Defaults to the SPROUT_CUSTOMER_ID env var."
                }
            },
            "required": ["profile_ids", "start_time", "end_time"]
        }),
    };
    let executor = normalized_executor(context, post_analytics);
    (tool, executor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_params_apply_documented_defaults() {
        let params: ProfileAnalyticsParams = serde_json::from_str(
            r#"{"profile_ids": "1,2", "start_time": "2024-01-01T00:00:00", "end_time": "2024-01-31T23:59:59"}"#,
        )
        .expect("parses");
        assert_eq!(params.metrics, "impressions,engagements,net_follower_growth");
        assert_eq!(params.timezone, "UTC");
        assert_eq!(params.customer_id, "");
    }

    #[test]
    fn test_post_params_default_limit_is_50() {
        let params: PostAnalyticsParams = serde_json::from_str(
            r#"{"profile_ids": "1", "start_time": "a", "end_time": "b"}"#,
        )
        .expect("parses");
        assert_eq!(params.limit, 50);
        assert_eq!(params.metrics, "impressions,engagements,clicks");
    }
}
