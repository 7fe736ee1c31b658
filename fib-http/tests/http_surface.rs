//! Integration test: the full plain-text HTTP surface.
//!
//! Drives the assembled router through `tower::ServiceExt::oneshot`,
//! covering the identity endpoint, the number endpoint's 404 contract for
//! invalid input, and the sequence endpoint's fallback policy.

use std::io::Write;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use fib_core::{ServiceIdentity, UNKNOWN_REVISION};
use fib_http::{error::NOT_FOUND_BODY, routes::create_router};

fn app_with_revision(revision: &str) -> Router {
    create_router(Arc::new(ServiceIdentity::new("Fibonacci Service", revision)))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let req = match Request::builder().uri(uri).body(Body::empty()) {
        Ok(r) => r,
        Err(e) => panic!("failed to build request: {e}"),
    };
    let resp = match app.oneshot(req).await {
        Ok(r) => r,
        Err(e) => panic!("handler error: {e}"),
    };
    let status = resp.status();
    let bytes = match axum::body::to_bytes(resp.into_body(), 64 * 1024).await {
        Ok(b) => b,
        Err(e) => panic!("failed to read body: {e}"),
    };
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn identity_endpoint_reflects_bundled_revision() {
    let mut file = match tempfile::NamedTempFile::new() {
        Ok(f) => f,
        Err(e) => panic!("failed to create temp file: {e}"),
    };
    if let Err(e) = write!(file, "v1.0.0-7-gabc1234\n") {
        panic!("failed to write temp file: {e}");
    }
    let identity = ServiceIdentity::from_revision_file(file.path());
    let app = create_router(Arc::new(identity));

    let (status, body) = get(app, "/v").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Fibonacci Service v1.0.0-7-gabc1234\n");
}

#[tokio::test]
async fn identity_endpoint_degrades_to_unknown_revision() {
    let identity =
        ServiceIdentity::from_revision_file(std::path::Path::new("/does/not/exist/.version"));
    let app = create_router(Arc::new(identity));

    let (status, body) = get(app, "/v").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, format!("Fibonacci Service {UNKNOWN_REVISION}\n"));
}

#[tokio::test]
async fn number_endpoint_contract() {
    let cases: &[(&str, StatusCode, &str)] = &[
        ("/fib/n/0", StatusCode::OK, "0\n"),
        ("/fib/n/1", StatusCode::OK, "1\n"),
        ("/fib/n/5", StatusCode::OK, "5\n"),
        ("/fib/n/10", StatusCode::OK, "55\n"),
        ("/fib/n/20", StatusCode::OK, "6765\n"),
        ("/fib/n/-1", StatusCode::NOT_FOUND, NOT_FOUND_BODY),
        ("/fib/n/abc", StatusCode::NOT_FOUND, NOT_FOUND_BODY),
        ("/fib/n/4.5", StatusCode::NOT_FOUND, NOT_FOUND_BODY),
    ];
    for (uri, want_status, want_body) in cases {
        let (status, body) = get(app_with_revision("test"), uri).await;
        assert_eq!(status, *want_status, "status mismatch for {uri}");
        assert_eq!(body, *want_body, "body mismatch for {uri}");
    }
}

#[tokio::test]
async fn sequence_endpoint_fallback_policy() {
    // Explicit positive count.
    let (status, body) = get(app_with_revision("test"), "/fib/s/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "1\n1\n2\n");

    // Absent, zero, negative, and non-integer counts all yield the default
    // ten terms; none of them is an error.
    let canonical = "1\n1\n2\n3\n5\n8\n13\n21\n34\n55\n";
    for uri in ["/fib/s", "/fib/s/", "/fib/s/0", "/fib/s/-3", "/fib/s/many"] {
        let (status, body) = get(app_with_revision("test"), uri).await;
        assert_eq!(status, StatusCode::OK, "status mismatch for {uri}");
        assert_eq!(body, canonical, "body mismatch for {uri}");
    }
}

#[tokio::test]
async fn unmatched_paths_return_the_standard_404_body() {
    for uri in ["/unknown/path", "/fib", "/fib/n", "/", "/fib/x/3"] {
        let (status, body) = get(app_with_revision("test"), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "status mismatch for {uri}");
        assert_eq!(body, NOT_FOUND_BODY, "body mismatch for {uri}");
    }
}

#[tokio::test]
async fn wrong_method_on_known_path_is_rejected() {
    let req = match Request::builder()
        .method(Method::POST)
        .uri("/fib/n/5")
        .body(Body::empty())
    {
        Ok(r) => r,
        Err(e) => panic!("failed to build request: {e}"),
    };
    let resp = match app_with_revision("test").oneshot(req).await {
        Ok(r) => r,
        Err(e) => panic!("handler error: {e}"),
    };
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
