//! Shared helpers for route handlers: error envelopes, identifier parsing and
//! validation message formatting.

use crate::response::{ApiResponse, Empty};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::{ObjectId, ResolveError};
use std::fmt::Display;
use validator::ValidationErrors;

/// Joins the messages of all field errors with `"; "`.
///
/// Errors without a custom message fall back to `<field>: <code>`.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(m) => m.to_string(),
                None => format!("{field}: {}", e.code),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiResponse::<Empty>::error(message))).into_response()
}

pub fn bad_request(message: impl Into<String>) -> Response {
    error_response(StatusCode::BAD_REQUEST, message)
}

/// `500` with the store error in the message.
pub fn db_error(e: impl Display) -> Response {
    tracing::error!(error = %e, "database operation failed");
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Database error: {e}"),
    )
}

/// Parses a path segment that must be a typed identifier.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, Response> {
    raw.parse::<ObjectId>().map_err(|e| {
        tracing::debug!(id = raw, error = %e, "rejected malformed identifier");
        bad_request("Invalid identifier format")
    })
}

/// Maps a failed menu item resolution onto a response.
pub fn resolve_error(e: ResolveError) -> Response {
    match e {
        ResolveError::NotFound(id) => {
            tracing::debug!(id = %id, "menu item not found");
            error_response(StatusCode::NOT_FOUND, "Menu item not found")
        }
        ResolveError::Database(e) => db_error(e),
    }
}
