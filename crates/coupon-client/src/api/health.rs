//! Backend health check

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::http::{ApiClient, ApiRequest};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

impl ApiClient {
    pub async fn health(&self) -> Result<HealthStatus> {
        self.fetch(ApiRequest::get("health")).await
    }
}
