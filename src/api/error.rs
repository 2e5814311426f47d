use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::warn;
use serde_json::json;

use crate::error::{ErrorKind, HacError};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Anything that went wrong while serving a request.
///
/// Clients always see `401 Invalid credentials`, whether the password was
/// wrong, the portal was unreachable or its markup changed; the real cause
/// is only logged.
#[derive(Debug)]
pub struct ApiError {
    kind: Option<ErrorKind>,
    reason: String,
}

impl ApiError {
    pub fn bad_request(reason: &str) -> Self {
        ApiError {
            kind: None,
            reason: reason.to_string(),
        }
    }
}

impl From<HacError> for ApiError {
    fn from(err: HacError) -> Self {
        ApiError {
            kind: Some(err.kind),
            reason: err.message,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(&rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.kind {
            Some(kind) => warn!("request failed ({}): {}", kind, self.reason),
            None => warn!("rejected request body: {}", self.reason),
        }
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": INVALID_CREDENTIALS })),
        )
            .into_response()
    }
}
