use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware;
use axum::routing::get;
use tower::ServiceExt;

use voxguard::infrastructure::observability::{REQUEST_ID_HEADER, request_id_middleware};

fn app() -> Router {
    Router::new()
        .route("/ping", get(|| async { "pong" }))
        .layer(middleware::from_fn(request_id_middleware))
}

#[tokio::test]
async fn given_request_id_header_when_handling_then_echoes_it() {
    let request = Request::builder()
        .uri("/ping")
        .header(REQUEST_ID_HEADER, "req-42")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(REQUEST_ID_HEADER).unwrap(), "req-42");
}

#[tokio::test]
async fn given_no_request_id_when_handling_then_generates_uuid() {
    let request = Request::builder().uri("/ping").body(Body::empty()).unwrap();

    let response = app().oneshot(request).await.unwrap();

    let id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}
