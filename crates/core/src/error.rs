//! Service error model.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Result type used across the service layer.
pub type ServiceResult<T> = Result<T, Error>;

/// Error taxonomy shared by every service.
///
/// Keep this focused on the failure classes a handler actually needs to
/// distinguish: absent rows, unique-key conflicts, bad input, a collaborator
/// that could not be reached, and the store itself failing.
#[derive(Debug, Error)]
pub enum Error {
    /// The entity is absent or soft-deleted.
    #[error("{0}")]
    NotFound(String),

    /// A unique constraint would be violated (e.g. duplicate SKU).
    #[error("{0}")]
    Duplicate(String),

    /// A value failed validation (e.g. malformed input).
    #[error("{0}")]
    Validation(String),

    /// Another service could not be reached or returned a failure.
    #[error("{0}")]
    Upstream(String),

    /// The persistence layer failed.
    #[error("storage error: {0}")]
    Storage(String),
}

impl Error {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Error::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            Error::Duplicate(_) => (StatusCode::CONFLICT, "duplicate"),
            Error::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            Error::Upstream(_) => (StatusCode::BAD_GATEWAY, "upstream_error"),
            Error::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error"),
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("row not found".to_string()),
            other => Error::Storage(other.to_string()),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        json_error(status, code, self.to_string())
    }
}

/// Consistent JSON error payload: `{ "error": code, "message": text }`.
pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let (status, code) = Error::not_found("product not found").status_and_code();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, "not_found");
    }

    #[test]
    fn duplicate_maps_to_409() {
        let (status, code) = Error::duplicate("sku taken").status_and_code();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(code, "duplicate");
    }

    #[test]
    fn upstream_maps_to_502() {
        let (status, _) = Error::upstream("partner service down").status_and_code();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn sqlx_row_not_found_converts_to_not_found() {
        let err: Error = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
