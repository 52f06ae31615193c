//! Listening tools: topics and topic-scoped message retrieval

use crate::boundary::normalized_executor;
use crate::context::ToolContext;
use crate::tool::{Tool, ToolExecutorFn};
use serde::Deserialize;
use serde_json::{Value, json};
use sprout_agent_client::{Filter, FilterSet, ListeningQuery, SproutError, split_csv};

fn default_limit() -> u32 {
    50
}

#[derive(Debug, Default, Deserialize)]
struct TopicsParams {
    #[serde(default)]
    customer_id: String,
}

async fn listening_topics(
    context: ToolContext,
    params: TopicsParams,
) -> Result<Value, SproutError> {
    let customer = context.resolve_customer(&params.customer_id)?;
    context
        .client
        .get(&format!("/v1/{customer}/listening/topics"), None)
        .await
}

/// Create the `list_listening_topics` tool
#[must_use]
pub fn list_listening_topics_tool(context: &ToolContext) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "list_listening_topics".to_string(),
        description: "List all listening topics configured for a customer.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "customer_id": {
                    "type": "string",
                    "description": "Sprout customer ID. Defaults to the SPROUT_CUSTOMER_ID env var."
                }
            }
        }),
    };
    let executor = normalized_executor(context, listening_topics);
    (tool, executor)
}

#[derive(Debug, Deserialize)]
struct ListeningMessagesParams {
    topic_id: String,
    start_time: String,
    end_time: String,
    #[serde(default)]
    networks: String,
    #[serde(default)]
    sort: String,
    #[serde(default)]
    fields: String,
    #[serde(default = "default_limit")]
    limit: u32,
    #[serde(default)]
    cursor: String,
    #[serde(default)]
    customer_id: String,
}

async fn listening_messages(
    context: ToolContext,
    params: ListeningMessagesParams,
) -> Result<Value, SproutError> {
    let customer = context.resolve_customer(&params.customer_id)?;

    let mut filters = FilterSet::new();
    filters.push(Filter::time_range(
        "created_time",
        &params.start_time,
        &params.end_time,
    ));
    // One network filter per requested network, upper-cased.
    for network in split_csv(&params.networks) {
        filters.push(Filter::equals("network", vec![network.to_uppercase()]));
    }

    let sort = split_csv(&params.sort);
    let fields = split_csv(&params.fields);
    let body = ListeningQuery {
        filters: filters.render(),
        limit: params.limit,
        sort: (!sort.is_empty()).then_some(sort),
        fields: (!fields.is_empty()).then_some(fields),
        cursor: (!params.cursor.is_empty()).then(|| params.cursor.clone()),
    };
    context
        .client
        .post(
            &format!(
                "/v1/{customer}/listening/topics/{}/messages",
                params.topic_id
            ),
            &body,
        )
        .await
}

/// Create the `get_listening_messages` tool
///
/// Topic-scoped message retrieval with optional per-network filters and
/// opaque cursor pass-through (the listening endpoint paginates with
/// `cursor`, not `page_cursor`).
#[must_use]
pub fn get_listening_messages_tool(context: &ToolContext) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "get_listening_messages".to_string(),
        description: "Retrieve messages for a listening topic within a time range.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "topic_id": {
                    "type": "string",
                    "description": "Listening topic ID (see list_listening_topics)."
                },
                "start_time": {
                    "type": "string",
                    "description": "Start datetime (ISO 8601)."
                },
                "end_time": {
                    "type": "string",
                    "description": "End datetime (ISO 8601)."
                },
                "networks": {
                    "type": "string",
                    "description": "Comma-separated networks to include (e.g. 'twitter,instagram'). \
                                    Empty means all networks."
                },
                "sort": {
                    "type": "string",
                    "description": "Comma-separated 'field:direction' sort keys (optional)."
                },
                "fields": {
                    "type": "string",
                    "description": "Comma-separated response fields to project (optional)."
                },
                "limit": {
                    "type": "integer",
                    "description": "Number of messages to return (default 50)."
                },
                "cursor": {
                    "type": "string",
                    "description": "Pagination cursor from a previous response (optional)."
                },
                "customer_id": {
                    "type": "string",
                    "description": "Sprout customer ID. Defaults to the SPROUT_CUSTOMER_ID env var."
                }
            },
            "required": ["topic_id", "start_time", "end_time"]
        }),
    };
    let executor = normalized_executor(context, listening_messages);
    (tool, executor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listening_params_defaults() {
        let params: ListeningMessagesParams = serde_json::from_str(
            r#"{"topic_id": "t1", "start_time": "a", "end_time": "b"}"#,
        )
        .expect("parses");
        assert_eq!(params.networks, "");
        assert_eq!(params.cursor, "");
        assert_eq!(params.limit, 50);
    }
}
