//! Error types for the user endpoint

use thiserror::Error;

/// Errors that can occur when fetching a user
#[derive(Debug, Error)]
pub enum UserApiError {
    /// The user id was empty
    #[error("User id must not be empty")]
    EmptyId,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("User API error ({status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Response body was not a user object
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl UserApiError {
    /// Whether the endpoint reported that the user does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, UserApiError::Status { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_is_not_not_found() {
        let err = UserApiError::Status { status: 503, message: String::new() };
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_status() {
        let err = UserApiError::Status { status: 404, message: "missing".into() };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "User API error (404): missing");
    }
}
