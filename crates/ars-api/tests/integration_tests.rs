//! # Integration Tests for ars-api
//!
//! Drives the assembled router in-process with `tower::ServiceExt::oneshot`
//! against a wiremock stub standing in for the GitLab raw-file API.
//! Covers the full round-trip, every error-taxonomy branch, the health
//! probes, and correlation-id echoing.

use std::path::Path;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use ars_api::state::{AppConfig, AppState};
use ars_gitlab::{ExtensionMap, GitLabClient, GitLabConfig};

/// Build the app with the GitLab client pointed at `upstream`.
fn test_app(upstream: &str, downloads: &Path) -> axum::Router {
    let config = GitLabConfig {
        base_url: upstream.parse().unwrap(),
        access_token: zeroize::Zeroizing::new("test-token".into()),
        download_root: downloads.to_path_buf(),
        timeout_secs: 5,
        extensions: ExtensionMap::default(),
    };
    let gitlab = GitLabClient::new(config).unwrap();
    ars_api::app(AppState::new(AppConfig::default(), gitlab))
}

/// POST a JSON body to /api/v1/artifacts.
async fn post_artifacts(
    app: axum::Router,
    body: &serde_json::Value,
) -> axum::http::Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/v1/artifacts")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Read a response body as JSON.
async fn body_json(response: axum::http::Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn valid_request() -> serde_json::Value {
    serde_json::json!({
        "repository": "my-org/my-repo",
        "artifactPath": "path/to/artifact.json",
        "versionSelector": "v1.0.0"
    })
}

// -- Health Probes ------------------------------------------------------------

#[tokio::test]
async fn healthz_returns_200_regardless_of_upstream_state() {
    let downloads = tempfile::tempdir().unwrap();
    // Upstream is a closed port; the probe must not care.
    let app = test_app("http://127.0.0.1:1", downloads.path());
    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({"status": "healthy"}));
}

#[tokio::test]
async fn ready_returns_200_regardless_of_upstream_state() {
    let downloads = tempfile::tempdir().unwrap();
    let app = test_app("http://127.0.0.1:1", downloads.path());
    let response = app
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!({"status": "ready"}));
}

// -- Round Trip ---------------------------------------------------------------

#[tokio::test]
async fn round_trip_retrieves_persists_and_responds() {
    let server = MockServer::start().await;
    let downloads = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(b"hello".to_vec(), "application/json; charset=utf-8"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app(&server.uri(), downloads.path());
    let response = post_artifacts(app, &valid_request()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(
        body["artifactId"],
        "my-org/my-repo:path/to/artifact.json:v1.0.0"
    );
    assert_eq!(body["mimeType"], "application/json");

    let file_path = body["filePath"].as_str().unwrap();
    assert_eq!(std::fs::read_to_string(file_path).unwrap(), "hello");
}

// -- Error Taxonomy -----------------------------------------------------------

#[tokio::test]
async fn upstream_404_is_preserved_with_a_not_found_detail() {
    let server = MockServer::start().await;
    let downloads = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("404 File Not Found"))
        .mount(&server)
        .await;

    let app = test_app(&server.uri(), downloads.path());
    let response = post_artifacts(app, &valid_request()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    let detail = body["detail"].as_str().unwrap().to_lowercase();
    assert!(detail.contains("not found"), "detail: {detail}");
}

#[tokio::test]
async fn upstream_401_is_preserved_with_an_authentication_detail() {
    let server = MockServer::start().await;
    let downloads = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let app = test_app(&server.uri(), downloads.path());
    let response = post_artifacts(app, &valid_request()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    let detail = body["detail"].as_str().unwrap().to_lowercase();
    assert!(detail.contains("authentication failed"), "detail: {detail}");
}

#[tokio::test]
async fn upstream_500_collapses_to_bad_gateway() {
    let server = MockServer::start().await;
    let downloads = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = test_app(&server.uri(), downloads.path());
    let response = post_artifacts(app, &valid_request()).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn unreachable_upstream_maps_to_500_failed_to_connect() {
    let downloads = tempfile::tempdir().unwrap();

    let app = test_app("http://127.0.0.1:1", downloads.path());
    let response = post_artifacts(app, &valid_request()).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    let detail = body["detail"].as_str().unwrap().to_lowercase();
    assert!(detail.contains("failed to connect"), "detail: {detail}");
}

#[tokio::test]
async fn missing_version_selector_is_a_422() {
    let downloads = tempfile::tempdir().unwrap();
    let app = test_app("http://127.0.0.1:1", downloads.path());

    let response = post_artifacts(
        app,
        &serde_json::json!({
            "repository": "my-org/my-repo",
            "artifactPath": "path/to/artifact.json"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn non_json_body_is_a_422() {
    let downloads = tempfile::tempdir().unwrap();
    let app = test_app("http://127.0.0.1:1", downloads.path());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/artifacts")
                .header("content-type", "application/json")
                .body(Body::from("not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn empty_repository_is_a_400_naming_the_field() {
    let downloads = tempfile::tempdir().unwrap();
    let app = test_app("http://127.0.0.1:1", downloads.path());

    let response = post_artifacts(
        app,
        &serde_json::json!({
            "repository": "",
            "artifactPath": "a",
            "versionSelector": "b"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["detail"].as_str().unwrap().contains("repository"));
}

#[tokio::test]
async fn slashless_repository_is_a_400() {
    let downloads = tempfile::tempdir().unwrap();
    let app = test_app("http://127.0.0.1:1", downloads.path());

    let response = post_artifacts(
        app,
        &serde_json::json!({
            "repository": "no-slash-here",
            "artifactPath": "a",
            "versionSelector": "b"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["detail"].as_str().unwrap().contains("org/repo"));
}

// -- Correlation ID -----------------------------------------------------------

#[tokio::test]
async fn supplied_correlation_id_is_echoed() {
    let downloads = tempfile::tempdir().unwrap();
    let app = test_app("http://127.0.0.1:1", downloads.path());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/artifacts")
                .header("content-type", "application/json")
                .header("X-Correlation-ID", "test-correlation-123")
                .body(Body::from(valid_request().to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let echoed = response
        .headers()
        .get("x-correlation-id")
        .and_then(|v| v.to_str().ok());
    assert_eq!(echoed, Some("test-correlation-123"));
}

#[tokio::test]
async fn correlation_id_is_generated_when_absent_even_on_errors() {
    let downloads = tempfile::tempdir().unwrap();
    let app = test_app("http://127.0.0.1:1", downloads.path());

    // Validation failure: the header must still be present on the response.
    let response = post_artifacts(
        app,
        &serde_json::json!({
            "repository": "",
            "artifactPath": "a",
            "versionSelector": "b"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let generated = response
        .headers()
        .get("x-correlation-id")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(!generated.is_empty());
}

#[tokio::test]
async fn correlation_id_is_echoed_on_health_probes() {
    let downloads = tempfile::tempdir().unwrap();
    let app = test_app("http://127.0.0.1:1", downloads.path());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .header("X-Correlation-ID", "probe-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response
            .headers()
            .get("x-correlation-id")
            .and_then(|v| v.to_str().ok()),
        Some("probe-42")
    );
}

// -- OpenAPI ------------------------------------------------------------------

#[tokio::test]
async fn openapi_document_lists_the_artifacts_path() {
    let downloads = tempfile::tempdir().unwrap();
    let app = test_app("http://127.0.0.1:1", downloads.path());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["paths"]["/api/v1/artifacts"].is_object());
    assert_eq!(body["info"]["title"], "artifact-retrieval-service");
}
