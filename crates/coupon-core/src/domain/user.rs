// ============================================================================
// Coupon Core - Session Entities
// File: crates/coupon-core/src/domain/user.rs
// Description: Credentials, token pair and logged-in identity
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

use coupon_shared::EntityId;

use super::role::ClientType;

/// Identity of the logged-in user, mirrored into persisted storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: EntityId,
    pub email: String,
    #[serde(alias = "displayName")]
    pub name: String,
    pub client_type: ClientType,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.client_type == ClientType::Admin
    }

    pub fn is_company(&self) -> bool {
        self.client_type == ClientType::Company
    }

    pub fn is_customer(&self) -> bool {
        self.client_type == ClientType::Customer
    }
}

/// Login form payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_type: Option<ClientType>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
            client_type: None,
        }
    }

    pub fn with_client_type(mut self, client_type: ClientType) -> Self {
        self.client_type = Some(client_type);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Body of a successful login or refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

impl AuthSession {
    pub fn tokens(&self) -> TokenPair {
        TokenPair {
            access_token: self.access_token.clone(),
            refresh_token: self.refresh_token.clone(),
        }
    }
}
