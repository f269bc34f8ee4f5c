use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use savings_core::FieldViolation;

/// Error responses for the savings API.
///
/// Range violations and body/type errors are deliberately distinct kinds:
/// a client sending a well-formed body with out-of-range numbers gets the
/// full violation list, while a body whose literals cannot be coerced to
/// the declared numeric kinds never reaches validation at all.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(Vec<FieldViolation>),

    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

impl From<Vec<FieldViolation>> for ApiError {
    fn from(violations: Vec<FieldViolation>) -> Self {
        ApiError::Validation(violations)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation failed",
                    "violations": violations,
                }),
            ),
            ApiError::MalformedBody(detail) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": detail,
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Helper type for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_bad_request() {
        let err = ApiError::Validation(vec![FieldViolation {
            field: "currentPotSize",
            message: "Current Pot Size must be greater than or equal to 0".to_string(),
        }]);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_malformed_body_is_bad_request() {
        let err = ApiError::MalformedBody("expected a number".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_error_keeps_every_violation() {
        let violations = vec![
            FieldViolation {
                field: "currentPotSize",
                message: "out of range".to_string(),
            },
            FieldViolation {
                field: "annualGrowthRate",
                message: "out of range".to_string(),
            },
        ];
        match ApiError::from(violations) {
            ApiError::Validation(kept) => assert_eq!(kept.len(), 2),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
