//! Transport-level tests against a local mock server

use serde_json::json;
use sprout_agent_client::{MessagesQuery, SproutClient, SproutError};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> SproutClient {
    SproutClient::new("test-token".to_string()).with_base_url(server.uri())
}

#[tokio::test]
async fn get_sends_bearer_and_json_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/metadata/client"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .get("/v1/metadata/client", None)
        .await
        .expect("request should succeed");
    assert_eq!(response, json!({"data": []}));
}

#[tokio::test]
async fn get_appends_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/123/listening/topics"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .get("/v1/123/listening/topics", Some(&[("limit", "10")]))
        .await
        .expect("request should succeed");
    assert_eq!(response, json!({"data": []}));
}

#[tokio::test]
async fn post_serializes_typed_body() {
    let server = MockServer::start().await;
    let body = MessagesQuery {
        filters: vec!["customer_profile_id.eq(1)".to_string()],
        limit: 50,
        page_cursor: None,
    };
    Mock::given(method("POST"))
        .and(path("/v1/123/messages"))
        .and(body_json(json!({
            "filters": ["customer_profile_id.eq(1)"],
            "limit": 50,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .post("/v1/123/messages", &body)
        .await
        .expect("request should succeed");
    assert_eq!(response, json!({"data": []}));
}

#[tokio::test]
async fn non_success_status_becomes_api_error_with_json_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/123/metadata/customer"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "unknown customer"})),
        )
        .mount(&server)
        .await;

    let error = client_for(&server)
        .get("/v1/123/metadata/customer", None)
        .await
        .expect_err("should fail");

    match error {
        SproutError::Api {
            status,
            url,
            detail,
        } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/v1/123/metadata/customer"));
            assert_eq!(detail, json!({"message": "unknown customer"}));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn non_json_error_body_is_kept_as_raw_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/123/metadata/customer"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal failure"))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .get("/v1/123/metadata/customer", None)
        .await
        .expect_err("should fail");

    match error {
        SproutError::Api { status, detail, .. } => {
            assert_eq!(status, 500);
            assert_eq!(detail, json!("internal failure"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn connection_failure_becomes_request_error() {
    // Bind-then-drop leaves a port with nothing listening.
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let error = SproutClient::new("test-token".to_string())
        .with_base_url(uri)
        .get("/v1/metadata/client", None)
        .await
        .expect_err("should fail");
    assert_eq!(error.kind(), "RequestError");
}
