//! Tests for upstream failure scenarios.
//!
//! Every failure must reach the caller as an error with no partial data.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use openalex_mcp::client::OpenAlexClient;
use openalex_mcp::config::Config;
use openalex_mcp::error::{ClientError, ToolError};
use openalex_mcp::tools::{GetWorkTool, McpTool, SearchTool, ToolContext};

fn setup_test_context(mock_server: &MockServer) -> ToolContext {
    let config = Config::for_testing(&mock_server.uri());
    let client = OpenAlexClient::new(config).unwrap();
    ToolContext::new(Arc::new(client))
}

/// Context pointing at a port nothing listens on.
fn unreachable_context() -> ToolContext {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = Config::for_testing(&format!("http://{addr}"));
    ToolContext::new(Arc::new(OpenAlexClient::new(config).unwrap()))
}

// =============================================================================
// Transport Failures
// =============================================================================

#[tokio::test]
async fn test_search_transport_failure() {
    let ctx = unreachable_context();

    let result = SearchTool.execute(&ctx, json!({"query": "x"})).await;

    assert!(matches!(
        result,
        Err(ToolError::Client(ClientError::Middleware(_) | ClientError::Http(_)))
    ));
}

#[tokio::test]
async fn test_get_work_transport_failure() {
    let ctx = unreachable_context();

    let result = GetWorkTool.execute(&ctx, json!({"work_id": "W1"})).await;

    assert!(matches!(
        result,
        Err(ToolError::Client(ClientError::Middleware(_) | ClientError::Http(_)))
    ));
}

// =============================================================================
// Upstream Status Errors
// =============================================================================

#[tokio::test]
async fn test_bad_filter_rejection_relayed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string("Invalid query parameters error. 'bogus' is not a valid date"),
        )
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);

    let err = SearchTool
        .execute(&ctx, json!({"query": "x", "filter": {"from_publication_date": "bogus"}}))
        .await
        .unwrap_err();

    assert!(matches!(err, ToolError::Client(ClientError::BadRequest { .. })));
    assert!(err.to_user_message().contains("'bogus' is not a valid date"));
}

#[tokio::test]
async fn test_server_error_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);

    let err = SearchTool.execute(&ctx, json!({"query": "x"})).await.unwrap_err();

    match err {
        ToolError::Client(ClientError::Server { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "Service Unavailable");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_surfaces_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works/W1"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);

    let err = GetWorkTool.execute(&ctx, json!({"work_id": "W1"})).await.unwrap_err();

    match err {
        ToolError::Client(e) => assert_eq!(e.status(), Some(429)),
        other => panic!("expected client error, got {other:?}"),
    }
}

// =============================================================================
// Malformed Responses
// =============================================================================

#[tokio::test]
async fn test_malformed_search_body_gives_no_partial_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"results": [{"id": "W1"}, {"id": "#),
        )
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);

    let result = SearchTool.execute(&ctx, json!({"query": "x"})).await;

    assert!(matches!(result, Err(ToolError::Client(ClientError::Parse(_)))));
}

#[tokio::test]
async fn test_wrong_shape_search_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": "nope"})))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);

    let result = SearchTool.execute(&ctx, json!({"query": "x"})).await;

    assert!(matches!(result, Err(ToolError::Client(ClientError::Parse(_)))));
}

#[tokio::test]
async fn test_invalid_arguments_never_reach_upstream() {
    let mock_server = MockServer::start().await;
    let ctx = setup_test_context(&mock_server);

    let result = SearchTool
        .execute(&ctx, json!({"query": "x", "filter": {"min_cited_by_count": "ten"}}))
        .await;

    assert!(matches!(result, Err(ToolError::Serialization(_))));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}
