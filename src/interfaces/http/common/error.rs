//! Error responses
//!
//! Every failure leaves the API as `{"messages", "status", "timestamp"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Error body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub messages: Vec<String>,
    pub status: u16,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, messages: Vec<String>) -> Self {
        Self {
            messages,
            status: status.as_u16(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    /// Body, path or query could not be parsed.
    BadRequest(String),
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self::Domain(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Domain(DomainError::Validation(_)) => StatusCode::NOT_ACCEPTABLE,
            Self::Domain(DomainError::Conflict(_)) => StatusCode::CONFLICT,
            Self::Domain(DomainError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Domain(DomainError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let messages = match self {
            Self::Domain(DomainError::Database(detail)) => {
                tracing::error!(error = %detail, "Storage failure");
                vec!["internal server error".to_string()]
            }
            Self::Domain(e) => e.messages(),
            Self::BadRequest(msg) => vec![msg],
        };
        (status, Json(ErrorResponse::new(status, messages))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_domain_errors_to_status() {
        let cases = [
            (DomainError::invalid("x"), StatusCode::NOT_ACCEPTABLE),
            (DomainError::Conflict("x".into()), StatusCode::CONFLICT),
            (DomainError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (DomainError::Database("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
        assert_eq!(ApiError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn database_details_stay_in_logs() {
        let resp = ApiError::from(DomainError::Database("disk I/O error".into())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.status, 500);
        assert_eq!(body.messages, vec!["internal server error"]);
    }
}
