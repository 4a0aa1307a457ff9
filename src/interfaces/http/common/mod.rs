//! Shared HTTP plumbing

pub mod validated_json;

pub use validated_json::ValidatedJson;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// JSON error body returned by every failing endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable description of the failure
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Map a `DomainError` onto its HTTP status and error body.
pub fn domain_error_response(e: DomainError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorResponse::new(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_error_taxonomy() {
        let (status, _) = domain_error_response(DomainError::NotFound {
            entity: "Usuario",
            field: "id",
            value: "1".into(),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = domain_error_response(DomainError::Validation("bad".into()));
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = domain_error_response(DomainError::Unavailable("down".into()));
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let (status, body) = domain_error_response(DomainError::Internal("boom".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Internal error: boom");
    }
}
