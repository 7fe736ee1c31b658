//! Error types for the HTTP layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Body returned with every 404 response.
pub const NOT_FOUND_BODY: &str = "404 Not Found\n";

/// Errors that can occur during request handling.
///
/// Every variant maps to HTTP 404: an invalid numeric path parameter is
/// treated as "resource not found", never as a 400. Preserving that status
/// is part of the service contract.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The path parameter is not a non-negative integer.
    #[error("invalid fibonacci index '{0}'")]
    InvalidIndex(String),

    /// No route matches the requested path.
    #[error("no such route")]
    RouteNotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
    }
}
