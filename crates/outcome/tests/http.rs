//! Rendering results through an axum router.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Response,
    routing::get,
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use outcome::config::{Environment, HttpConfig, GENERIC_FAILURE_MESSAGE};
use outcome::middleware::{catch_panic_layer, TRACE_ID_KEY};
use outcome::{Outcome, PagedResult, PageRequest, Result};

async fn missing() -> Result<String> {
    Result::not_found("missing id")
}

async fn greeting() -> Result<String> {
    Result::success("hello".to_string())
}

async fn page() -> PagedResult<Vec<u32>> {
    PagedResult::from_page(vec![3, 4], &PageRequest::new(2, 2), 5)
}

async fn deleted() -> Outcome {
    Outcome::no_content()
}

async fn denied() -> Outcome {
    Outcome::forbidden("admins only")
}

async fn offline() -> Result<u8> {
    Result::unavailable("inventory service offline")
}

async fn explode() -> Outcome {
    panic!("ledger out of balance")
}

fn app(environment: Environment) -> Router {
    Router::new()
        .route("/missing", get(missing))
        .route("/greeting", get(greeting))
        .route("/page", get(page))
        .route("/deleted", get(deleted))
        .route("/denied", get(denied))
        .route("/offline", get(offline))
        .route("/explode", get(explode))
        .layer(catch_panic_layer(&HttpConfig::new(environment)))
}

async fn call(environment: Environment, uri: &str) -> Response {
    app(environment)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_not_found_maps_to_404_with_errors() {
    let response = call(Environment::Production, "/missing").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response).await;
    assert_eq!(body["status"], "NotFound");
    assert_eq!(body["isSuccess"], false);
    assert_eq!(body["errors"][0]["message"], "missing id");
}

#[tokio::test]
async fn test_success_body_carries_value() {
    let response = call(Environment::Production, "/greeting").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["value"], "hello");
    assert_eq!(body["isSuccess"], true);
}

#[tokio::test]
async fn test_paged_body_carries_paged_info() {
    let body = json_body(call(Environment::Production, "/page").await).await;

    assert_eq!(body["value"], serde_json::json!([3, 4]));
    assert_eq!(body["pagedInfo"]["pageNumber"], 2);
    assert_eq!(body["pagedInfo"]["pageCount"], 3);
    assert_eq!(body["pagedInfo"]["hasNextPage"], true);
}

#[tokio::test]
async fn test_no_content_and_forbidden_are_body_less() {
    let deleted = call(Environment::Production, "/deleted").await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
    assert!(to_bytes(deleted.into_body(), usize::MAX).await.unwrap().is_empty());

    let denied = call(Environment::Production, "/denied").await;
    assert_eq!(denied.status(), StatusCode::FORBIDDEN);
    assert!(to_bytes(denied.into_body(), usize::MAX).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unavailable_maps_to_503() {
    let response = call(Environment::Production, "/offline").await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_panic_in_development_shows_message() {
    let response = call(Environment::Development, "/explode").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(response).await;
    assert_eq!(body["status"], "Failure");
    assert_eq!(body["errors"][0]["message"], "ledger out of balance");
    assert!(body["metadata"][TRACE_ID_KEY].is_string());
    assert_eq!(body["correlationId"], body["metadata"][TRACE_ID_KEY]);
}

#[tokio::test]
async fn test_panic_in_production_is_generic() {
    let body = json_body(call(Environment::Production, "/explode").await).await;

    assert_eq!(body["errors"][0]["message"], GENERIC_FAILURE_MESSAGE);
    assert!(!body.to_string().contains("ledger"));
}
