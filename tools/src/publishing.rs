//! Publishing tools: create, list, and retrieve outbound posts

use crate::boundary::normalized_executor;
use crate::context::ToolContext;
use crate::tool::{Tool, ToolExecutorFn};
use serde::Deserialize;
use serde_json::{Value, json};
use sprout_agent_client::{
    Filter, FilterSet, NewPost, PostFields, PublishingQuery, SproutError, split_csv,
};

fn default_limit() -> u32 {
    50
}

#[derive(Debug, Deserialize)]
struct CreatePostParams {
    profile_ids: String,
    text: String,
    #[serde(default)]
    scheduled_send_time: String,
    #[serde(default)]
    customer_id: String,
}

async fn create_post(context: ToolContext, params: CreatePostParams) -> Result<Value, SproutError> {
    let customer = context.resolve_customer(&params.customer_id)?;

    let body = NewPost {
        post_type: "OUTBOUND".to_string(),
        profile_ids: split_csv(&params.profile_ids),
        fields: PostFields { text: params.text },
        scheduled_send_time: (!params.scheduled_send_time.is_empty())
            .then(|| params.scheduled_send_time.clone()),
    };
    context
        .client
        .post(&format!("/v1/{customer}/publishing/posts"), &body)
        .await
}

/// Create the `create_post` tool
///
/// A post without a scheduled send time is saved as a draft.
#[must_use]
pub fn create_post_tool(context: &ToolContext) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "create_post".to_string(),
        description: "Create a draft or scheduled post in Sprout Social.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "profile_ids": {
                    "type": "string",
                    "description": "Comma-separated Sprout profile IDs to publish to."
                },
                "text": {
                    "type": "string",
                    "description": "Post content/body text."
                },
                "scheduled_send_time": {
                    "type": "string",
                    "description": "When to publish (ISO 8601). Leave empty to save as draft."
                },
                "customer_id": {
                    "type": "string",
                    "description": "Sprout customer ID. Defaults to the SPROUT_CUSTOMER_ID env var."
                }
            },
            "required": ["profile_ids", "text"]
        }),
    };
    let executor = normalized_executor(context, create_post);
    (tool, executor)
}

#[derive(Debug, Deserialize)]
struct ListPostsParams {
    #[serde(default)]
    status: String,
    #[serde(default = "default_limit")]
    limit: u32,
    #[serde(default)]
    page_cursor: String,
    #[serde(default)]
    customer_id: String,
}

async fn list_posts(context: ToolContext, params: ListPostsParams) -> Result<Value, SproutError> {
    let customer = context.resolve_customer(&params.customer_id)?;

    let mut filters = FilterSet::new();
    let statuses: Vec<String> = split_csv(&params.status)
        .into_iter()
        .map(|s| s.to_uppercase())
        .collect();
    filters.push_opt((!statuses.is_empty()).then(|| Filter::equals("status", statuses)));

    let body = PublishingQuery {
        filters: filters.render(),
        limit: params.limit,
        page_cursor: (!params.page_cursor.is_empty()).then(|| params.page_cursor.clone()),
    };
    context
        .client
        .post(&format!("/v1/{customer}/publishing/posts"), &body)
        .await
}

/// Create the `list_publishing_posts` tool
#[must_use]
pub fn list_publishing_posts_tool(context: &ToolContext) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "list_publishing_posts".to_string(),
        description: "List publishing posts, optionally filtered by status.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "status": {
                    "type": "string",
                    "description": "Comma-separated statuses to filter by (e.g. 'draft,scheduled'). \
                                    Empty means all."
                },
                "limit": {
                    "type": "integer",
                    "description": "Number of posts to return (default 50)."
                },
                "page_cursor": {
                    "type": "string",
                    "description": "Pagination cursor from a previous response (optional)."
                },
                "customer_id": {
                    "type": "string",
                    "description": "Sprout customer ID. Defaults to the SPROUT_CUSTOMER_ID env var."
                }
            }
        }),
    };
    let executor = normalized_executor(context, list_posts);
    (tool, executor)
}

#[derive(Debug, Deserialize)]
struct GetPostParams {
    post_id: String,
    #[serde(default)]
    customer_id: String,
}

async fn get_post(context: ToolContext, params: GetPostParams) -> Result<Value, SproutError> {
    let customer = context.resolve_customer(&params.customer_id)?;
    context
        .client
        .get(
            &format!("/v1/{customer}/publishing/posts/{}", params.post_id),
            None,
        )
        .await
}

/// Create the `get_publishing_post` tool
#[must_use]
pub fn get_publishing_post_tool(context: &ToolContext) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "get_publishing_post".to_string(),
        description: "Retrieve a specific publishing post by ID.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "post_id": {
                    "type": "string",
                    "description": "The publishing post ID to retrieve."
                },
                "customer_id": {
                    "type": "string",
                    "description": "Sprout customer ID. Defaults to the SPROUT_CUSTOMER_ID env var."
                }
            },
            "required": ["post_id"]
        }),
    };
    let executor = normalized_executor(context, get_post);
    (tool, executor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_post_params_empty_schedule_means_draft() {
        let params: CreatePostParams =
            serde_json::from_str(r#"{"profile_ids": "1,2", "text": "hello"}"#).expect("parses");
        assert_eq!(params.scheduled_send_time, "");
    }

    #[test]
    fn test_list_posts_params_defaults() {
        let params: ListPostsParams = serde_json::from_str("{}").expect("parses");
        assert_eq!(params.status, "");
        assert_eq!(params.limit, 50);
    }
}
