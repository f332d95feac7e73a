// ============================================================================
// Coupon Core - Client Type
// File: crates/coupon-core/src/domain/role.rs
// Description: Closed set of roles a logged-in user can hold
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Role enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientType {
    Admin,
    Company,
    Customer,
}

impl ClientType {
    pub const ALL: [ClientType; 3] = [ClientType::Admin, ClientType::Company, ClientType::Customer];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClientType::Admin => "admin",
            ClientType::Company => "company",
            ClientType::Customer => "customer",
        }
    }

    /// Landing page of the role's dashboard.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            ClientType::Admin => "/admin/dashboard",
            ClientType::Company => "/company/dashboard",
            ClientType::Customer => "/customer/dashboard",
        }
    }
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" | "administrator" => Ok(ClientType::Admin),
            "company" => Ok(ClientType::Company),
            "customer" => Ok(ClientType::Customer),
            other => Err(DomainError::UnknownRole(other.to_string())),
        }
    }
}
