//! End-to-end smoke tests.
//!
//! Each test starts the real router on an ephemeral loopback port and
//! drives it over HTTP - through the probe library, through reqwest, and
//! through the compiled `pulse-probe` binary, whose exit code and output
//! lines are the external contract. Tests run in parallel since every
//! server gets its own port.

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::json;

use pulse::probe::{self, ProbeError, ProbeOutcome, ProbeTarget};
use pulse::routes::create_router;

/// Serve any router on an ephemeral loopback port, returning the port.
async fn spawn_app(app: Router) -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    port
}

/// Start the real service on an ephemeral port.
async fn spawn_service() -> u16 {
    spawn_app(create_router()).await
}

/// A stand-in service whose health endpoint reports failure with a 500.
fn unhealthy_app() -> Router {
    Router::new().route(
        "/health",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"status": "FAIL"})),
            )
        }),
    )
}

/// An ephemeral port that nothing serves.
async fn dead_port() -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn target(port: u16) -> ProbeTarget {
    ProbeTarget {
        host: "127.0.0.1".to_string(),
        port,
        path: "/health".to_string(),
    }
}

/// Run the compiled probe binary against a port and capture its output.
async fn run_probe_binary(port: u16) -> std::process::Output {
    tokio::process::Command::new(env!("CARGO_BIN_EXE_pulse-probe"))
        .args(["--host", "127.0.0.1", "--port", &port.to_string()])
        .output()
        .await
        .expect("Failed to run probe binary")
}

#[tokio::test]
async fn health_returns_contract_body() {
    let port = spawn_service().await;

    let response = reqwest::get(format!("http://127.0.0.1:{port}/health"))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response.headers()[reqwest::header::CONTENT_TYPE],
        "application/json"
    );

    let body = response.text().await.unwrap();
    assert_eq!(body, r#"{"status":"OK","message":"Server is healthy"}"#);
}

#[tokio::test]
async fn health_body_is_byte_identical_across_calls() {
    let port = spawn_service().await;
    let url = format!("http://127.0.0.1:{port}/health");

    let first = reqwest::get(&url).await.unwrap().bytes().await.unwrap();
    let second = reqwest::get(&url).await.unwrap().bytes().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn root_returns_greeting_with_timestamp() {
    let port = spawn_service().await;

    let response = reqwest::get(format!("http://127.0.0.1:{port}/"))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body = response.text().await.unwrap();
    assert!(body.contains("Hello!"), "body was: {body}");
    assert!(body.contains("Current time:"), "body was: {body}");
}

#[tokio::test]
async fn root_ignores_query_parameters_and_headers() {
    let port = spawn_service().await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://127.0.0.1:{port}/?foo=bar&baz=1"))
        .header("X-Custom", "anything")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let port = spawn_service().await;

    let response = reqwest::get(format!("http://127.0.0.1:{port}/no-such-route"))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn probe_passes_against_healthy_service() {
    let port = spawn_service().await;

    let report = probe::run(&target(port)).await.unwrap();
    assert_eq!(report.outcome, ProbeOutcome::Passed);
    assert_eq!(report.status, http::StatusCode::OK);
    assert!(report.body.contains("OK"));
}

#[tokio::test]
async fn probe_surfaces_transport_error_when_nothing_listens() {
    let port = dead_port().await;

    let err = probe::run(&target(port)).await.unwrap_err();
    assert!(matches!(err, ProbeError::Transport(_)));
}

#[tokio::test]
async fn probe_fails_against_unhealthy_service() {
    let port = spawn_app(unhealthy_app()).await;

    let report = probe::run(&target(port)).await.unwrap();
    assert_eq!(report.outcome, ProbeOutcome::Failed);
    assert_eq!(report.status, http::StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn probe_is_idempotent_against_healthy_service() {
    let port = spawn_service().await;
    let target = target(port);

    let first = probe::run(&target).await.unwrap();
    let second = probe::run(&target).await.unwrap();
    assert_eq!(first.outcome, ProbeOutcome::Passed);
    assert_eq!(first.outcome, second.outcome);
    assert_eq!(first.body, second.body);
}

#[tokio::test]
async fn probe_binary_exits_zero_against_healthy_service() {
    let port = spawn_service().await;

    let output = run_probe_binary(port).await;
    assert!(
        output.status.success(),
        "stderr was: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(r#"Response: {"status":"OK","message":"Server is healthy"}"#),
        "stdout was: {stdout}"
    );
    assert!(stdout.contains("Smoke test passed - app is healthy"));
}

#[tokio::test]
async fn probe_binary_exits_one_against_unhealthy_service() {
    let port = spawn_app(unhealthy_app()).await;

    let output = run_probe_binary(port).await;
    assert_eq!(output.status.code(), Some(1));

    // The body is still dumped before the verdict
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Response:"), "stdout was: {stdout}");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Smoke test failed"), "stderr was: {stderr}");
}

#[tokio::test]
async fn probe_binary_exits_one_when_nothing_listens() {
    let port = dead_port().await;

    let output = run_probe_binary(port).await;
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error connecting to server"),
        "stderr was: {stderr}"
    );
}
