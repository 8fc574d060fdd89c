use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    state::AppState,
    validate::{ValidationOutcome, validate},
};

#[derive(Deserialize)]
pub struct ValidateRequest {
    // An absent field reads as empty and falls out as a format failure.
    #[serde(default)]
    pub email: String,
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ValidateResponse {
    fn valid(name: String, category: String, id: String) -> Self {
        Self {
            valid: true,
            name: Some(name),
            category: Some(category),
            id: Some(id),
        }
    }

    fn not_found() -> Self {
        Self {
            valid: false,
            name: None,
            category: None,
            id: None,
        }
    }
}

pub async fn validate_email_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ValidateRequest>,
) -> Result<Response, AppError> {
    match validate(&state.participants, &state.certificate_ids, &payload.email) {
        ValidationOutcome::Valid { name, category, id } => {
            Ok(Json(ValidateResponse::valid(name, category, id)).into_response())
        }
        ValidationOutcome::NotFound => Ok(Json(ValidateResponse::not_found()).into_response()),
        ValidationOutcome::BadFormat => Err(AppError::InvalidEmailFormat),
        ValidationOutcome::MissingId => Err(AppError::MissingCertificateId),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ValidateRequest, ValidateResponse};

    #[test]
    fn test_valid_body_shape() {
        let response = ValidateResponse::valid(
            "Alice A".to_string(),
            "HOST".to_string(),
            "abc123".to_string(),
        );

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "valid": true, "name": "Alice A", "category": "HOST", "id": "abc123" })
        );
    }

    #[test]
    fn test_not_found_body_omits_fields() {
        let response = ValidateResponse::not_found();

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "valid": false })
        );
    }

    #[test]
    fn test_request_tolerates_missing_email() {
        let request: ValidateRequest = serde_json::from_str("{}").unwrap();

        assert_eq!(request.email, "");
    }
}
