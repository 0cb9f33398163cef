//! HTTP tests driving the router in-process.

use aigames::server::{cors_layer, router};
use aigames::{Banner, ErrorBody, Health, ResetResponse};
use aigames_tictactoe::{Engine, MoveCounter, MoveResponse};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

fn app(engine: Engine) -> Router {
    router(engine, cors_layer(&["*".to_string()]).expect("valid origins"))
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

async fn read_json<T: DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn test_banner() {
    let response = app(Engine::default())
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let banner: Banner = read_json(response).await;
    assert_eq!(banner.message, "Tic Tac Toe AI Backend");
}

#[tokio::test]
async fn test_health() {
    let response = app(Engine::default())
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let health: Health = read_json(response).await;
    assert_eq!(health.status, "ok");
}

#[tokio::test]
async fn test_ai_move_hard() {
    let request = post_json(
        "/api/ai-move",
        serde_json::json!({
            "board": ["X", "X", " ", "O", "O", " ", " ", " ", " "],
            "difficulty": "hard",
            "aiSymbol": "X"
        }),
    );
    let response = app(Engine::default()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = read_json(response).await;
    assert_eq!(body["move"], 2);
    assert_eq!(body["winner"], "X");
    assert_eq!(body["winningLine"], serde_json::json!([0, 1, 2]));
    assert_eq!(body["board"][2], "X");
}

#[tokio::test]
async fn test_ai_move_in_progress_has_null_winner() {
    let request = post_json(
        "/api/ai-move",
        serde_json::json!({
            "board": ["X", " ", " ", " ", " ", " ", " ", " ", " "],
            "difficulty": "hard",
            "aiSymbol": "O"
        }),
    );
    let response = app(Engine::default()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: MoveResponse = read_json(response).await;
    assert_eq!(body.chosen, 4);
    assert_eq!(body.winner, None);
    assert!(body.winning_line.is_empty());
}

#[tokio::test]
async fn test_ai_move_full_board() {
    let request = post_json(
        "/api/ai-move",
        serde_json::json!({
            "board": ["X", "O", "X", "O", "X", "X", "O", "X", "O"],
            "difficulty": "easy",
            "aiSymbol": "X"
        }),
    );
    let response = app(Engine::default()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: MoveResponse = read_json(response).await;
    assert_eq!(body.chosen, -1);
    assert_eq!(body.winner.as_deref(), Some("draw"));
}

#[tokio::test]
async fn test_ai_move_rejects_short_board() {
    let request = post_json(
        "/api/ai-move",
        serde_json::json!({
            "board": ["X", "O"],
            "difficulty": "hard",
            "aiSymbol": "O"
        }),
    );
    let response = app(Engine::default()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorBody = read_json(response).await;
    assert!(body.error.contains('2'), "unexpected error: {}", body.error);
}

#[tokio::test]
async fn test_ai_move_rejects_unknown_symbol() {
    let request = post_json(
        "/api/ai-move",
        serde_json::json!({
            "board": ["X", "Z", " ", " ", " ", " ", " ", " ", " "],
            "difficulty": "hard",
            "aiSymbol": "O"
        }),
    );
    let response = app(Engine::default()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_ai_move_rejects_unknown_difficulty() {
    let request = post_json(
        "/api/ai-move",
        serde_json::json!({
            "board": [" ", " ", " ", " ", " ", " ", " ", " ", " "],
            "difficulty": "medium",
            "aiSymbol": "O"
        }),
    );
    let response = app(Engine::default()).oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_reset_clears_counts() {
    let counter = MoveCounter::new();
    let app = app(Engine::new(counter.clone()));

    let request = post_json(
        "/api/ai-move",
        serde_json::json!({
            "board": ["X", " ", " ", " ", " ", " ", " ", " ", " "],
            "difficulty": "easy",
            "aiSymbol": "O"
        }),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(counter.len(), 1);

    let response = app
        .oneshot(post_json("/api/reset", serde_json::json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: ResetResponse = read_json(response).await;
    assert_eq!(body.cleared, 1);
    assert!(counter.is_empty());
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/ai-move")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app(Engine::default()).oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[test]
fn test_cors_rejects_invalid_origin() {
    assert!(cors_layer(&["bad\norigin".to_string()]).is_err());
}
