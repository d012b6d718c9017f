/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Integration tests for response classification in the session gate.


use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use moviebot_client::{
    ApiError, ChatApiClient, Method, SessionGate, SessionOutcome, GENERIC_FAILURE,
};
use serde_json::{json, Value};
use test_helpers::*;

fn status_app() -> Router {
    Router::new()
        .route(
            "/unauthorized",
            get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({ "value": 1 }))) }),
        )
        .route(
            "/rejected",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "database unavailable" })),
                )
            }),
        )
        .route(
            "/bad-gateway",
            get(|| async { (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>") }),
        )
        .route(
            "/structured-detail",
            get(|| async {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "detail": [{ "loc": ["body"], "msg": "field required" }] })),
                )
            }),
        )
        .route("/not-json", get(|| async { "definitely not json" }))
        .route("/ok", get(|| async { Json(json!({ "value": 42 })) }))
        .route("/echo", post(|Json(body): Json<Value>| async move { Json(body) }))
}

async fn client() -> ChatApiClient {
    ChatApiClient::new(&spawn(status_app()).await).unwrap()
}

#[tokio::test]
async fn test_success_parses_payload() {
    let client = client().await;
    let outcome: SessionOutcome<Value> = client.request(Method::GET, "/ok", None).await;
    assert_eq!(outcome, SessionOutcome::Ok(json!({ "value": 42 })));
}

#[tokio::test]
async fn test_body_is_sent_as_json() {
    let client = client().await;
    let body = json!([{ "role": "user", "content": "hi" }]);
    let outcome: SessionOutcome<Value> =
        client.request(Method::POST, "/echo", Some(body.clone())).await;
    assert_eq!(outcome, SessionOutcome::Ok(body));
}

#[tokio::test]
async fn test_401_is_unauthorized_regardless_of_body() {
    let client = client().await;
    // The body would parse fine as `Value`; it must still be ignored.
    let outcome: SessionOutcome<Value> = client.request(Method::GET, "/unauthorized", None).await;
    assert_eq!(outcome, SessionOutcome::Unauthorized);
}

#[tokio::test]
async fn test_rejection_carries_detail() {
    let client = client().await;
    let outcome: SessionOutcome<Value> = client.request(Method::GET, "/rejected", None).await;
    assert_eq!(
        outcome,
        SessionOutcome::Failure(ApiError::Rejected {
            status: 500,
            detail: "database unavailable".to_string(),
        })
    );
}

#[tokio::test]
async fn test_rejection_without_detail_uses_fallback() {
    let client = client().await;
    for path in ["/bad-gateway", "/structured-detail"] {
        let outcome: SessionOutcome<Value> = client.request(Method::GET, path, None).await;
        match outcome {
            SessionOutcome::Failure(ApiError::Rejected { detail, .. }) => {
                assert_eq!(detail, GENERIC_FAILURE, "{path}")
            }
            other => panic!("{path}: unexpected outcome {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_unparseable_success_is_a_failure() {
    let client = client().await;
    let outcome: SessionOutcome<Value> = client.request(Method::GET, "/not-json", None).await;
    assert!(matches!(outcome, SessionOutcome::Failure(ApiError::Decode(_))));
}

#[tokio::test]
async fn test_wrong_shape_is_a_decode_failure() {
    let client = client().await;
    let outcome: SessionOutcome<Vec<String>> = client.request(Method::GET, "/ok", None).await;
    assert!(matches!(outcome, SessionOutcome::Failure(ApiError::Decode(_))));
}

#[tokio::test]
async fn test_unreachable_server_is_a_transport_failure() {
    let client = ChatApiClient::new(&dead_url()).unwrap();
    let outcome: SessionOutcome<Value> = client.request(Method::GET, "/ok", None).await;
    assert!(matches!(outcome, SessionOutcome::Failure(ApiError::Transport(_))));
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let base = spawn(status_app()).await;
    let client = ChatApiClient::new(&format!("{base}/")).unwrap();
    assert_eq!(client.base_url(), base);
    let outcome: SessionOutcome<Value> = client.request(Method::GET, "/ok", None).await;
    assert!(matches!(outcome, SessionOutcome::Ok(_)));
}
