use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error("Invalid HTTP status code: {0}")]
    InvalidStatusCode(u16),
}

/// The uniform JSON body returned by every endpoint.
///
/// `success` is derived from the status code and is `true` below 400.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub message: String,
    pub data: T,
    pub success: bool,
}

impl<T> ApiResponse<T> {
    pub fn new(
        status_code: u16,
        message: impl Into<String>,
        data: T,
    ) -> Result<Self, EnvelopeError> {
        if !(100..=599).contains(&status_code) {
            return Err(EnvelopeError::InvalidStatusCode(status_code));
        }
        Ok(Self {
            status_code,
            message: message.into(),
            data,
            success: status_code < 400,
        })
    }
}
