// ============================================================================
// Coupon Core - Company Entity
// File: crates/coupon-core/src/domain/company.rs
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

use coupon_shared::constants::{MAX_NAME_LENGTH, MIN_NAME_LENGTH};
use coupon_shared::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: EntityId,
    pub name: String,
    pub email: String,
}

/// Create/update form for a company. The password is only sent when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPayload {
    #[validate(length(min = MIN_NAME_LENGTH, max = MAX_NAME_LENGTH, message = "Name must be between 2 and 100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 4, message = "Password must be at least 4 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl CompanyPayload {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            email: email.into().trim().to_lowercase(),
            password: None,
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

impl From<&Company> for CompanyPayload {
    fn from(company: &Company) -> Self {
        Self::new(company.name.clone(), company.email.clone())
    }
}
