use account_adapters::AccessGuardError;
use account_core::{AccountError, ApiResponse};
use axum::{
    Json,
    extract::rejection::{BytesRejection, JsonRejection},
    extract::multipart::MultipartRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Transport face of [`AccountError`]: renders the envelope with
/// `success = false` and `data = null`.
#[derive(Debug)]
pub struct ApiError(pub AccountError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = match self.0 {
            AccountError::Internal(detail) => {
                tracing::error!(error = %detail, "request failed");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        };

        match ApiResponse::new(status_code.as_u16(), message, serde_json::Value::Null) {
            Ok(body) => (status_code, Json(body)).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "failed to build error envelope");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl From<AccountError> for ApiError {
    fn from(error: AccountError) -> Self {
        ApiError(error)
    }
}

impl From<AccessGuardError> for ApiError {
    fn from(error: AccessGuardError) -> Self {
        ApiError(error.into())
    }
}

// Extractor rejections are client input errors and go through the envelope
// like every other failure.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(AccountError::validation(rejection.body_text()))
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        ApiError(AccountError::validation(rejection.body_text()))
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError(AccountError::validation(rejection.body_text()))
    }
}
