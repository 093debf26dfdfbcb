//! Tests for routing behaviour shared by every endpoint.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use tecnoloc::{model::api::ErrorDto, server::router::routes};
use tecnoloc_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{body_json, TestContextExt};

/// Expect 405 with an ErrorDto body for a method the route does not support
#[tokio::test]
async fn method_not_allowed_returns_error_dto() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = routes().with_state(test.into_app_state());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/diagnose")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Method Not Allowed");

    Ok(())
}

/// Expect 200 with an empty body for OPTIONS on the proxy endpoint
#[tokio::test]
async fn options_on_diagnose_succeeds() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = routes().with_state(test.into_app_state());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/diagnose")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect the open CORS policy on API responses
#[tokio::test]
async fn allows_any_origin() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_knowledge_tables()
        .build()
        .await?;
    let app = routes().with_state(test.into_app_state());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/maintenance-logs")
        .header(header::ORIGIN, "https://campo.tecnoloc.com.br")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    Ok(())
}

/// Expect 400 with an ErrorDto body when the request body is not valid JSON
#[tokio::test]
async fn malformed_json_returns_error_dto() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = routes().with_state(test.into_app_state());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/diagnose")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert!(!body.error.is_empty());

    Ok(())
}

/// Expect 400 with an ErrorDto body when a required query parameter is missing
#[tokio::test]
async fn missing_query_parameter_returns_error_dto() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_knowledge_tables()
        .build()
        .await?;
    let app = routes().with_state(test.into_app_state());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/manuals/lookup")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert!(body.error.contains("model"));

    Ok(())
}

/// Expect 400 with an ErrorDto body for a manual id that is not a number
#[tokio::test]
async fn invalid_path_id_returns_error_dto() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_knowledge_tables()
        .build()
        .await?;
    let app = routes().with_state(test.into_app_state());

    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/manuals/abc")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert!(!body.error.is_empty());

    Ok(())
}
