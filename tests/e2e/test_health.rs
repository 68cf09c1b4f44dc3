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
async fn it_should_not_touch_the_provider(ctx: &TestContext) {
    ctx.client
        .get("/health")
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    assert!(ctx.upstream.requests().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_in_responses(ctx: &TestContext) {
    for path in ["/health", "/", "/api/get_token"] {
        ctx.client.get(path).await.unwrap().assert_header_exists("x-request-id");
    }

    // Error responses carry it too
    ctx.upstream.respond_to_token_with(StatusCode::FORBIDDEN);
    ctx.client
        .get("/api/get_token")
        .await
        .unwrap()
        .assert_header_exists("x-request-id");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_keep_caller_request_id(ctx: &TestContext) {
    let response = ctx
        .client
        .get_with_header("/health", "x-request-id", "trace-1234")
        .await
        .unwrap();

    response.assert_header("x-request-id", "trace-1234");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_generate_distinct_request_ids(ctx: &TestContext) {
    let first = ctx.client.get("/health").await.unwrap();
    let second = ctx.client.get("/health").await.unwrap();

    assert_ne!(first.header("x-request-id"), second.header("x-request-id"));
}
