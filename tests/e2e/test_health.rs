use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.text(), "OK");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_be_ready_when_token_is_configured(ctx: &TestContext) {
    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("ready"));
    assert_eq!(
        body.get("instagram").and_then(|v| v.as_str()),
        Some("configured")
    );
}

#[tokio::test]
async fn it_should_not_be_ready_with_placeholder_token() {
    let ctx = TestContext::start(Some("IGQ...")).await;

    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("not_ready"));
    assert_eq!(
        body.get("instagram").and_then(|v| v.as_str()),
        Some("not_configured")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_call_instagram_for_readiness(ctx: &TestContext) {
    ctx.client.get("/health/ready").await.unwrap();

    assert_eq!(
        helpers::instagram_mocks::outbound_request_count(&ctx.instagram).await,
        0
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_in_responses(ctx: &TestContext) {
    for path in ["/health", "/health/ready", "/api/instagram", "/gallery"] {
        let response = ctx.client.get(path).await.unwrap();
        response.assert_header_exists("x-request-id");
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_echo_incoming_request_id(ctx: &TestContext) {
    let response = ctx
        .client
        .get_with_headers("/health", &[("x-request-id", "edge-abc-123")])
        .await
        .unwrap();

    response.assert_header("x-request-id", "edge-abc-123");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_handle_concurrent_health_checks(ctx: &TestContext) {
    let mut futures = Vec::new();
    for _ in 0..10 {
        let client = ctx.client.clone();
        futures.push(async move { client.get("/health").await });
    }

    let results = futures::future::join_all(futures).await;

    for result in results {
        let response = result.unwrap();
        response.assert_status(StatusCode::OK);
    }
}
