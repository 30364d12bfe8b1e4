//! Custom error types and handling
//!
//! This module defines the error taxonomy shared by the API client and the
//! controllers. The client normalizes every failure into [`ApiError`] and
//! never recovers; callers decide locally whether to retry, display
//! inline, or redirect.

use thiserror::Error;

/// Errors surfaced by the remote users API and its client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Local precondition failure; no network call was made
    #[error("{0}")]
    InvalidArgument(String),

    /// HTTP 400 - the server rejected the submitted data
    #[error("{0}")]
    Validation(String),

    /// HTTP 409 - duplicate data, usually email or mobile number
    #[error("{0}")]
    Conflict(String),

    /// HTTP 404
    #[error("{0}")]
    NotFound(String),

    /// HTTP >= 500, or a transport failure
    #[error("{0}")]
    Server(String),

    /// Anything else, including malformed envelopes
    #[error("{0}")]
    Unknown(String),
}

impl ApiError {
    /// Get the stable error kind for this error type
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Server(_) => "SERVER_ERROR",
            Self::Unknown(_) => "UNKNOWN",
        }
    }

    /// Canonical HTTP status for this error, when one applies
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::InvalidArgument(_) => None,
            Self::Validation(_) => Some(400),
            Self::Conflict(_) => Some(409),
            Self::NotFound(_) => Some(404),
            Self::Server(_) => Some(500),
            Self::Unknown(_) => None,
        }
    }

    /// Normalize an HTTP error status plus the envelope's payload message.
    ///
    /// Mirrors the server's wording when the payload carries a message and
    /// falls back to a generic one per status class.
    pub fn from_status(status: u16, payload: Option<String>) -> Self {
        match status {
            404 => Self::NotFound("User not found".to_string()),
            409 => Self::Conflict(
                payload.unwrap_or_else(|| "Duplicate data detected".to_string()),
            ),
            400 => Self::Validation(
                payload.unwrap_or_else(|| "Invalid data provided".to_string()),
            ),
            s if s >= 500 => Self::Server(format!(
                "Server error ({}). Please try again later.",
                s
            )),
            s => Self::Unknown(
                payload.unwrap_or_else(|| format!("Request failed with status {}", s)),
            ),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            Self::Server(format!("Server unreachable: {}", err))
        } else {
            Self::Unknown(err.to_string())
        }
    }
}

/// Result type alias using ApiError
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_taxonomy() {
        assert!(matches!(ApiError::from_status(404, None), ApiError::NotFound(_)));
        assert!(matches!(ApiError::from_status(409, None), ApiError::Conflict(_)));
        assert!(matches!(ApiError::from_status(400, None), ApiError::Validation(_)));
        assert!(matches!(ApiError::from_status(500, None), ApiError::Server(_)));
        assert!(matches!(ApiError::from_status(502, None), ApiError::Server(_)));
        assert!(matches!(ApiError::from_status(418, None), ApiError::Unknown(_)));
    }

    #[test]
    fn test_from_status_keeps_server_wording() {
        let err = ApiError::from_status(409, Some("email already exists".to_string()));
        assert_eq!(err, ApiError::Conflict("email already exists".to_string()));
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(ApiError::Validation(String::new()).http_status(), Some(400));
        assert_eq!(ApiError::Conflict(String::new()).http_status(), Some(409));
        assert_eq!(ApiError::NotFound(String::new()).http_status(), Some(404));
        assert_eq!(ApiError::InvalidArgument(String::new()).http_status(), None);
    }
}
