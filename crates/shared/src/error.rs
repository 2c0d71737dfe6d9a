use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    Validation,
    OutOfRange,
    Internal,
}

impl ErrorCode {
    pub fn title(self) -> &'static str {
        match self {
            Self::NotFound => "Not found",
            Self::Validation => "Invalid input",
            Self::OutOfRange => "Unable to compute",
            Self::Internal => "Internal error",
        }
    }
}

/// A failure that can be shown to whoever made the request.
#[derive(Debug, Error)]
#[error("{code:?}: {message}")]
pub struct ApiException {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiException {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
