use account_core::{AccountError, ApiResponse};
use axum::{Json, http::StatusCode};
use serde::Serialize;

use crate::error::ApiError;

/// Wraps `data` in the success envelope for the given status.
pub fn envelope<T: Serialize>(
    status_code: StatusCode,
    message: &str,
    data: T,
) -> Result<(StatusCode, Json<ApiResponse<T>>), ApiError> {
    let body = ApiResponse::new(status_code.as_u16(), message, data)
        .map_err(|e| AccountError::internal(e.to_string()))?;
    Ok((status_code, Json(body)))
}
