//! `AppState::new` builds its probes from the `probe` config section.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use camino_tempfile::Utf8TempDir;
use serde_json::Value;
use tower::ServiceExt;

use nodepulse_agent::{app_state::AppState, config, router};

fn app_from_yaml(yaml: &str) -> Router {
    let cfg = config::load_from_str(yaml).expect("must parse");
    router::build_router(AppState::new(cfg))
}

fn loadavg_dir(content: &str) -> Utf8TempDir {
    let dir = camino_tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("loadavg"), content).unwrap();
    dir
}

async fn fetch(app: &Router) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/status.php")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn loadavg_path_and_seed_come_from_config() {
    let dir = loadavg_dir("0.15 0.10 0.05 1/120 42\n");
    let yaml = format!(
        "version: 1\nprobe:\n  loadavg_path: \"{}\"\n  users_seed: 9\n",
        dir.path().join("loadavg")
    );

    let first = app_from_yaml(&yaml);
    let second = app_from_yaml(&yaml);

    let mut seq_a = Vec::new();
    let mut seq_b = Vec::new();
    for _ in 0..16 {
        let (status, json) = fetch(&first).await;
        assert_eq!(status, StatusCode::OK);
        assert!((json["cpu_load"].as_f64().unwrap() - 15.0).abs() < 1e-9);
        seq_a.push(json["current_users"].as_u64().unwrap());

        let (_, json) = fetch(&second).await;
        seq_b.push(json["current_users"].as_u64().unwrap());
    }
    assert_eq!(seq_a, seq_b);
    assert!(seq_a.iter().all(|v| (10..=50).contains(v)));
}

#[tokio::test]
async fn missing_loadavg_file_uses_configured_policy() {
    let dir = camino_tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent");

    let zero = format!("version: 1\nprobe:\n  loadavg_path: \"{missing}\"\n");
    let (status, json) = fetch(&app_from_yaml(&zero)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["cpu_load"].as_f64().unwrap(), 0.0);

    let error = format!(
        "version: 1\nprobe:\n  loadavg_path: \"{missing}\"\n  on_metric_unavailable: error\n"
    );
    let (status, json) = fetch(&app_from_yaml(&error)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"], "METRIC_UNAVAILABLE");
}

#[tokio::test]
async fn sysinfo_source_serves_a_report() {
    let app = app_from_yaml("version: 1\nprobe:\n  load_source: sysinfo\n");
    let (status, json) = fetch(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "online");
    assert!(json["cpu_load"].as_f64().unwrap() >= 0.0);
}
