use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, Local, TimeZone};
use serde_json::Value;
use tower::ServiceExt;

use session_timer::{
    create_router,
    state::{AppState, ManualClock, SessionClock},
};

fn setup() -> (Arc<ManualClock>, Arc<SessionClock>, Router) {
    let now = Local.with_ymd_and_hms(2024, 5, 1, 14, 20, 0).unwrap();
    let manual = Arc::new(ManualClock::new(now));
    let clock = SessionClock::create(manual.clone());
    let state = Arc::new(AppState::new(Arc::clone(&clock)));
    (manual, clock, create_router(state))
}

async fn call(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_reports_ok() {
    let (_, _, app) = setup();
    let (status, body) = call(&app, "GET", "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn status_before_start_shows_placeholders() {
    let (_, _, app) = setup();
    let (status, body) = call(&app, "GET", "/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["display"]["start_time"], "--:--");
    assert_eq!(body["display"]["end_time"], "--:--");
    assert_eq!(body["display"]["progress"], 0);
    assert!(body["time_left_seconds"].is_null());
    assert_eq!(body["ticking"], false);
}

#[tokio::test]
async fn reset_starts_session_and_status_follows_ticks() {
    let (manual, clock, app) = setup();

    let (status, body) = call(&app, "POST", "/reset").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "restarted");
    assert_eq!(body["display"]["start_time"], "14:20");
    assert_eq!(body["display"]["end_time"], "14:25");
    assert_eq!(body["display"]["progress"], 0);

    manual.advance(Duration::seconds(90));
    clock.tick();

    let (_, body) = call(&app, "GET", "/status").await;
    assert_eq!(body["time_left_seconds"], 210);
    assert_eq!(body["remaining"], "03:30");
    assert_eq!(body["display"]["progress"], 30);
    assert_eq!(body["restarts"], 1);
    assert!(body["last_restart_time"].is_string());
}

#[tokio::test]
async fn reset_endpoint_rejects_get() {
    let (_, _, app) = setup();
    let response = app
        .oneshot(Request::builder().uri("/reset").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
