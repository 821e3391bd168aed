use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::models::InvitationResponse;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Request body is required")]
    MissingPayload,

    #[error("Request body is not valid JSON: {0}")]
    MalformedPayload(String),

    #[error("Invalid fields: {0}")]
    InvalidFields(String),

    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingPayload
            | AppError::MalformedPayload(_)
            | AppError::InvalidFields(_) => StatusCode::BAD_REQUEST,
            AppError::MissingConfiguration(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Every failure renders the same envelope the dispatch endpoint
        // returns, so callers only ever parse one shape.
        let body = Json(InvitationResponse::failure(self.to_string()));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_bad_request() {
        let response = AppError::MissingPayload.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::InvalidFields("emails is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_missing_configuration_is_server_error() {
        let response =
            AppError::MissingConfiguration("MAIL_API_KEY".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
