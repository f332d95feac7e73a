//! Common types

use serde::{Deserialize, Serialize};

pub type EntityId = i64;

/// Error payload returned by the backend on non-2xx responses.
///
/// The backend is not consistent about the field name, so both are accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Best-effort extraction of a human-readable message from a raw body.
    pub fn message_from(raw: &str) -> String {
        match serde_json::from_str::<ErrorBody>(raw) {
            Ok(body) => body
                .message
                .or(body.error)
                .unwrap_or_else(|| raw.trim().to_string()),
            Err(_) => raw.trim().to_string(),
        }
    }
}
