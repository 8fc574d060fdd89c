use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Request-level failures, serialized as `{valid:false, error:...}` so the
/// client can treat every non-valid body uniformly.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid email format")]
    InvalidEmailFormat,

    /// The participant exists but the offline id batch has not covered them.
    /// A data gap on our side, so it surfaces as a server error.
    #[error("Certificate ID not found")]
    MissingCertificateId,

    #[error("Server error")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(source) = &self {
            error!("API error: {source}");
        }

        let status = match self {
            AppError::InvalidEmailFormat => StatusCode::BAD_REQUEST,
            AppError::MissingCertificateId | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = json!({ "valid": false, "error": self.to_string() });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::AppError;
    use axum::response::IntoResponse;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::InvalidEmailFormat.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::MissingCertificateId.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Internal("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            AppError::InvalidEmailFormat.to_string(),
            "Invalid email format"
        );
        assert_eq!(
            AppError::MissingCertificateId.to_string(),
            "Certificate ID not found"
        );
        assert_eq!(AppError::Internal("boom".into()).to_string(), "Server error");
    }
}
