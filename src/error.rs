use thiserror::Error;

use crate::models::review::DraftError;

/// Login failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Login failed: {message}")]
    Rejected { message: String },
    #[error("login request failed: {0}")]
    Transport(String),
    #[error("unexpected login response: {0}")]
    Decode(String),
}

impl AuthError {
    /// Text shown under the login form.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Rejected { .. } => self.to_string(),
            AuthError::Transport(_) | AuthError::Decode(_) => {
                "An error occurred. Please try again.".to_string()
            }
        }
    }
}

/// Failures of the read-only place endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("server responded with HTTP {status_code}")]
    Status { status_code: u16 },
    #[error("network error: {0}")]
    Transport(String),
    #[error("could not read server response: {0}")]
    Decode(String),
}

/// Review submission failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Failed to submit review: {message}")]
    Rejected { message: String },
    #[error("Failed to submit review: {0}")]
    Transport(String),
    #[error(transparent)]
    InvalidDraft(#[from] DraftError),
}
