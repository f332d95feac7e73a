//! Client error types

use thiserror::Error;

use coupon_core::DomainError;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("No refresh token stored")]
    MissingRefreshToken,

    #[error("Token refresh failed: {0}")]
    RefreshFailed(#[source] Box<ClientError>),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ClientError {
    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// True when the session was dropped because it could not be refreshed.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ClientError::MissingRefreshToken | ClientError::RefreshFailed(_))
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ClientError::Domain(DomainError::from(errors))
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
