//! Mapping of library errors onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use super::wire::FieldViolationView;
use crate::error::Error;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<FieldViolationView>,
}

impl Error {
    /// HTTP status and machine-readable kind for this error.
    #[must_use]
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            Self::InvalidComponent(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            Self::MalformedRequest { .. } => (StatusCode::BAD_REQUEST, "malformed_request"),
            Self::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, kind) = self.status();

        let (message, fields) = match &self {
            Self::InvalidComponent(err) => (
                self.to_string(),
                err.violations.iter().map(FieldViolationView::from).collect(),
            ),
            _ if status.is_server_error() => {
                log::error!("request failed: {self}");
                ("internal server error".to_string(), Vec::new())
            }
            _ => (self.to_string(), Vec::new()),
        };

        let body = ErrorBody {
            error: kind,
            message,
            fields,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{FieldViolation, ValidationError};

    #[test]
    fn test_status_mapping() {
        let invalid: Error = ValidationError::new(vec![FieldViolation::missing("name")]).into();
        assert_eq!(invalid.status().0, StatusCode::BAD_REQUEST);

        let malformed = Error::MalformedRequest {
            reason: "expected JSON".into(),
        };
        assert_eq!(malformed.status().0, StatusCode::BAD_REQUEST);

        assert_eq!(
            Error::component_not_found(1).status(),
            (StatusCode::NOT_FOUND, "not_found")
        );

        let storage: Error = rusqlite::Error::InvalidQuery.into();
        assert_eq!(
            storage.status(),
            (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = Error::component_not_found(9).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = Error::Task("join failed".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
