//! Axum route handlers for the Fibonacci service API.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use fib_core::{fibonacci, sequence, ServiceIdentity};

use crate::error::ApiError;

// ── Shared state ─────────────────────────────────────────────────────────────

type Identity = Arc<ServiceIdentity>;

/// Number of sequence terms returned when the count parameter is absent or
/// invalid.
pub const DEFAULT_SEQUENCE_COUNT: usize = 10;

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router with the given service identity.
///
/// The identity is injected at startup; handlers hold no other state, and
/// every request is routed independently.
pub fn create_router(identity: Identity) -> Router {
    Router::new()
        .route("/v", get(service_name))
        .route("/fib/n/{num}", get(fib_number))
        .route("/fib/s", get(fib_sequence_default))
        .route("/fib/s/", get(fib_sequence_default))
        .route("/fib/s/{count}", get(fib_sequence))
        .fallback(not_found)
        .with_state(identity)
        .layer(TraceLayer::new_for_http())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /v` — service name and revision.
pub async fn service_name(State(identity): State<Identity>) -> String {
    format!("{identity}\n")
}

/// `GET /fib/n/{num}` — the nth Fibonacci number.
///
/// # Errors
/// Returns [`ApiError::InvalidIndex`] (rendered as 404) if the path
/// parameter is not a non-negative integer.
pub async fn fib_number(Path(num): Path<String>) -> Result<String, ApiError> {
    let n = parse_fib_index(&num)?;
    Ok(format!("{}\n", fibonacci(n)))
}

/// `GET /fib/s` — the first [`DEFAULT_SEQUENCE_COUNT`] sequence terms.
pub async fn fib_sequence_default() -> String {
    render_sequence(DEFAULT_SEQUENCE_COUNT)
}

/// `GET /fib/s/{count}` — the first `count` sequence terms.
///
/// A non-integer or non-positive count silently falls back to the default;
/// it is never surfaced as an error and `0` is never passed through to
/// produce an empty body.
pub async fn fib_sequence(Path(count): Path<String>) -> String {
    render_sequence(parse_sequence_count(&count))
}

async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

// ── Parsing / rendering helpers ───────────────────────────────────────────────

/// Parse a Fibonacci index from a path parameter.
///
/// # Errors
/// Returns [`ApiError::InvalidIndex`] for anything that is not a
/// non-negative integer.
pub fn parse_fib_index(raw: &str) -> Result<u64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::InvalidIndex(raw.to_owned()))
}

/// Parse a sequence count, applying the fallback policy.
#[must_use]
pub fn parse_sequence_count(raw: &str) -> usize {
    match raw.parse::<usize>() {
        Ok(count) if count > 0 => count,
        _ => DEFAULT_SEQUENCE_COUNT,
    }
}

fn render_sequence(count: usize) -> String {
    let mut body = String::new();
    for term in sequence().take(count) {
        body.push_str(&term.to_string());
        body.push('\n');
    }
    body
}
