//! Metadata lookup tools: customers, profiles, tags, groups, users, teams
//!
//! All metadata operations are plain GETs with no filters; everything
//! except `list_customers` is scoped to a customer id.

use crate::boundary::normalized_executor;
use crate::context::ToolContext;
use crate::tool::{Tool, ToolExecutorFn};
use serde::Deserialize;
use serde_json::{Value, json};
use sprout_agent_client::SproutError;

#[derive(Debug, Default, Deserialize)]
struct CustomerParams {
    #[serde(default)]
    customer_id: String,
}

fn customer_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "customer_id": {
                "type": "string",
                "description": "Sprout customer ID. Defaults to the SPROUT_CUSTOMER_ID env var."
            }
        }
    })
}

async fn customer_lookup(
    context: ToolContext,
    params: CustomerParams,
    suffix: &str,
) -> Result<Value, SproutError> {
    let customer = context.resolve_customer(&params.customer_id)?;
    context
        .client
        .get(&format!("/v1/{customer}/metadata/customer{suffix}"), None)
        .await
}

fn customer_lookup_tool(
    context: &ToolContext,
    name: &str,
    description: &str,
    suffix: &'static str,
) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: name.to_string(),
        description: description.to_string(),
        input_schema: customer_schema(),
    };
    let executor = normalized_executor(context, move |context, params: CustomerParams| {
        customer_lookup(context, params, suffix)
    });
    (tool, executor)
}

/// Create the `list_customers` tool
///
/// Lists all customers/accounts accessible with the current API token; the
/// returned customer ids scope every other call.
#[must_use]
pub fn list_customers_tool(context: &ToolContext) -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "list_customers".to_string(),
        description: "List all customers/accounts accessible with the current API token. \
                      Returns customer IDs and names needed for other API calls."
            .to_string(),
        input_schema: json!({"type": "object", "properties": {}}),
    };
    #[derive(Debug, Default, Deserialize)]
    struct NoParams {}
    let executor = normalized_executor(context, |context: ToolContext, _params: NoParams| async move {
        context.client.get("/v1/metadata/client", None).await
    });
    (tool, executor)
}

/// Create the `list_profiles` tool (social profiles for a customer)
#[must_use]
pub fn list_profiles_tool(context: &ToolContext) -> (Tool, ToolExecutorFn) {
    customer_lookup_tool(
        context,
        "list_profiles",
        "List all social profiles for a customer.",
        "",
    )
}

/// Create the `list_tags` tool (message tags for a customer)
#[must_use]
pub fn list_tags_tool(context: &ToolContext) -> (Tool, ToolExecutorFn) {
    customer_lookup_tool(
        context,
        "list_tags",
        "List all message tags for a customer.",
        "/tags",
    )
}

/// Create the `list_groups` tool (profile groups for a customer)
#[must_use]
pub fn list_groups_tool(context: &ToolContext) -> (Tool, ToolExecutorFn) {
    customer_lookup_tool(
        context,
        "list_groups",
        "List all profile groups for a customer.",
        "/groups",
    )
}

/// Create the `list_users` tool (active users for a customer)
#[must_use]
pub fn list_users_tool(context: &ToolContext) -> (Tool, ToolExecutorFn) {
    customer_lookup_tool(
        context,
        "list_users",
        "List all active users for a customer.",
        "/users",
    )
}

/// Create the `list_teams` tool (teams for a customer)
#[must_use]
pub fn list_teams_tool(context: &ToolContext) -> (Tool, ToolExecutorFn) {
    customer_lookup_tool(
        context,
        "list_teams",
        "List all teams for a customer.",
        "/teams",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprout_agent_client::SproutClient;

    fn context() -> ToolContext {
        ToolContext::new(SproutClient::new("test-token".to_string()), None)
    }

    #[test]
    fn test_metadata_tool_names_and_schemas() {
        let ctx = context();
        for (expected, (tool, _executor)) in [
            ("list_customers", list_customers_tool(&ctx)),
            ("list_profiles", list_profiles_tool(&ctx)),
            ("list_tags", list_tags_tool(&ctx)),
            ("list_groups", list_groups_tool(&ctx)),
            ("list_users", list_users_tool(&ctx)),
            ("list_teams", list_teams_tool(&ctx)),
        ] {
            assert_eq!(tool.name, expected);
            assert!(tool.input_schema.is_object());
        }
    }

    #[tokio::test]
    async fn test_missing_customer_yields_error_payload_not_a_fault() {
        let ctx = context();
        let (_tool, executor) = list_profiles_tool(&ctx);

        let output = executor("{}".to_string()).await.expect("boundary is total");
        let parsed: Value = serde_json::from_str(&output).expect("valid JSON");
        assert_eq!(parsed["error"], "MissingCustomerId");
    }
}
