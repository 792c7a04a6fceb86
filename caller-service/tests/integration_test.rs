//! Integration tests for caller-service with greeter-service
//!
//! These tests run a real greeter (or a stand-in) on a loopback listener and
//! drive the caller's router against it.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use caller_service::{build_state, create_router, CallerConfig, CallerState, HealthResponse};
use chrono::NaiveTime;
use discovery::{DiscoveryConfig, Url};
use error::ErrorResponse;
use greeter_service::GreeterConfig;
use http_body_util::BodyExt;
use regex::Regex;
use tokio::net::TcpListener;
use tower::ServiceExt; // for `oneshot`

/// Run the real greeter on an ephemeral port.
async fn spawn_greeter(message: &str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let config = GreeterConfig::new(message);
    tokio::spawn(greeter_service::serve_on(listener, config, std::future::pending()));
    addr
}

/// Run an arbitrary stand-in on an ephemeral port.
async fn spawn_stub(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    addr
}

fn caller_config(greeter: Option<SocketAddr>) -> CallerConfig {
    let mut registry = DiscoveryConfig::default();
    if let Some(addr) = greeter {
        registry = registry.with_service("hello", Url::parse(&format!("http://{}", addr)).unwrap());
    }
    CallerConfig {
        registry,
        upstream_timeout_ms: 500,
        upstream_connect_timeout_ms: 500,
        ..CallerConfig::default()
    }
}

fn caller(state: CallerState) -> Router {
    create_router(state)
}

async fn get_root(app: Router) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

fn error_code(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body).unwrap().code
}

#[tokio::test]
async fn test_greeting_is_prefixed_with_time() {
    let greeter = spawn_greeter("hi there").await;
    let state = build_state(&caller_config(Some(greeter))).unwrap();

    let (status, body) = get_root(caller(state)).await;

    assert_eq!(status, StatusCode::OK);
    let pattern = Regex::new(r"^\d{2}:\d{2}:\d{2}: hi there$").unwrap();
    assert!(pattern.is_match(&body), "unexpected body {body:?}");
}

#[tokio::test]
async fn test_prefix_uses_injected_clock() {
    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 34, 56).unwrap()
    }

    let greeter = spawn_greeter("hi there").await;
    let state = build_state(&caller_config(Some(greeter))).unwrap().with_clock(noon);

    let (status, body) = get_root(caller(state)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "12:34:56: hi there");
}

#[tokio::test]
async fn test_prefixes_do_not_go_backwards() {
    let greeter = spawn_greeter("hi there").await;
    let app = caller(build_state(&caller_config(Some(greeter))).unwrap());

    let (_, first) = get_root(app.clone()).await;
    tokio::time::sleep(Duration::from_secs(1)).await;
    let (_, second) = get_root(app).await;

    // Only meaningful when both calls land on the same day
    let (first, second) = (&first[..8], &second[..8]);
    if first < "23:59:55" {
        assert!(first < second, "{first:?} then {second:?}");
    }
}

#[tokio::test]
async fn test_unreachable_greeter_is_bad_gateway() {
    // Bind then drop to get a port nobody listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let dead = listener.local_addr().unwrap();
    drop(listener);

    let state = build_state(&caller_config(Some(dead))).unwrap();

    let started = std::time::Instant::now();
    let (status, body) = get_root(caller(state)).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(error_code(&body), "UPSTREAM_CONNECT");
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_unregistered_greeter_is_unavailable() {
    let state = build_state(&caller_config(None)).unwrap();

    let (status, body) = get_root(caller(state)).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(error_code(&body), "DISCOVERY_NOT_REGISTERED");
}

#[tokio::test]
async fn test_greeter_error_status_is_bad_gateway() {
    let stub = spawn_stub(Router::new().route(
        "/",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    ))
    .await;
    let state = build_state(&caller_config(Some(stub))).unwrap();

    let (status, body) = get_root(caller(state)).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(error_code(&body), "UPSTREAM_STATUS");
    assert!(!body.contains("boom"));
}

#[tokio::test]
async fn test_slow_greeter_is_gateway_timeout() {
    let stub = spawn_stub(Router::new().route(
        "/",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "too late"
        }),
    ))
    .await;
    let state = build_state(&caller_config(Some(stub))).unwrap();

    let (status, body) = get_root(caller(state)).await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(error_code(&body), "UPSTREAM_TIMEOUT");
}

#[tokio::test]
async fn test_health_does_not_call_greeter() {
    let state = build_state(&caller_config(None)).unwrap();

    let response = caller(state)
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let health: HealthResponse = serde_json::from_slice(&body).unwrap();
    assert!(health.healthy);
    assert_eq!(health.service, "caller-service");
}

#[tokio::test]
async fn test_end_to_end_over_tcp() {
    let greeter = spawn_greeter("hi there").await;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let caller_addr = listener.local_addr().unwrap();
    let state = build_state(&caller_config(Some(greeter))).unwrap();
    tokio::spawn(caller_service::serve_on(listener, state, std::future::pending()));

    let response = reqwest::get(format!("http://{}/", caller_addr)).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"));

    let body = response.text().await.unwrap();
    assert!(body.ends_with(": hi there"), "unexpected body {body:?}");
}
