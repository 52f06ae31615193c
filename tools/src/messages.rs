//! Inbox message tools
//!
//! `get_messages` queries the inbound inbox (comments, DMs, mentions). It
//! is not a source of outbound post counts; use the publishing and
//! analytics tools for those.

use crate::boundary::normalized_executor;
use crate::context::ToolContext;
use crate::tool::{Tool, ToolExecutorFn};
use serde::Deserialize;
use serde_json::{Value, json};
use sprout_agent_client::{Filter, FilterSet, MessagesQuery, SproutError, split_csv};

fn default_limit() -> u32 {
    50
}

#[derive(Debug, Deserialize)]
struct MessagesParams {
    profile_ids: String,
    start_time: String,
    end_time: String,
    #[serde(default)]
    post_type: String,
    #[serde(default)]
    tag_ids: String,
    #[serde(default = "default_limit")]
    limit: u32,
    #[serde(default)]
    page_cursor: String,
    #[serde(default)]
    customer_id: String,
}

async fn messages(context: ToolContext, params: MessagesParams) -> Result<Value, SproutError> {
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
    filters.push_opt(
        (!params.post_type.is_empty())
            .then(|| Filter::equals("post_type", vec![params.post_type.clone()])),
    );
    let tags = split_csv(&params.tag_ids);
    filters.push_opt((!tags.is_empty()).then(|| Filter::equals("tag_id", tags)));

    let body = MessagesQuery {
        filters: filters.render(),
        limit: params.limit,
        page_cursor: (!params.page_cursor.is_empty()).then(|| params.page_cursor.clone()),
    };
    context
        .client
        .post(&format!("/v1/{customer}/messages"), &body)
        .await
}

/// Create the `get_messages` tool
///
/// Inbound inbox retrieval with metadata and filtering.
#[must_use]
pub fn get_messages_tool(context: &ToolContext) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "get_messages".to_string(),
        description: "Retrieve inbound inbox messages with metadata and filtering. \
                      Not a source of outbound post counts."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "profile_ids": {
                    "type": "string",
                    "description": "Comma-separated Sprout profile IDs."
                },
                "start_time": {
                    "type": "string",
                    "description": "Start datetime (ISO 8601, e.g. '2024-01-01T00:00:00')."
                },
                "end_time": {
                    "type": "string",
                    "description": "End datetime (ISO 8601)."
                },
                "post_type": {
                    "type": "string",
                    "description": "Filter by direction: 'INBOUND', 'OUTBOUND', or '' for all."
                },
                "tag_ids": {
                    "type": "string",
                    "description": "Comma-separated tag IDs to filter by (optional)."
                },
                "limit": {
                    "type": "integer",
                    "description": "Number of messages to return (default 50)."
                },
                "page_cursor": {
                    "type": "string",
                    "description": "Pagination cursor from a previous response (optional)."
                },
                "customer_id": {
                    "type": "string",
                    "description": "Sprout customer ID. Defaults to the SPROUT_CUSTOMER_ID env var."
                }
            },
            "required": ["profile_ids", "start_time", "end_time"]
        }),
    };
    let executor = normalized_executor(context, messages);
    (tool, executor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_params_default_to_empty() {
        let params: MessagesParams = serde_json::from_str(
            r#"{"profile_ids": "1", "start_time": "a", "end_time": "b"}"#,
        )
        .expect("parses");
        assert_eq!(params.post_type, "");
        assert_eq!(params.tag_ids, "");
        assert_eq!(params.page_cursor, "");
        assert_eq!(params.limit, 50);
    }
}
