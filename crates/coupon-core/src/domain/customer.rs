// ============================================================================
// Coupon Core - Customer Entity
// File: crates/coupon-core/src/domain/customer.rs
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

use coupon_shared::constants::MAX_NAME_LENGTH;
use coupon_shared::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Customer {
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => self.email.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Last name is required"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 4, message = "Password must be at least 4 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl CustomerPayload {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into().trim().to_string(),
            last_name: last_name.into().trim().to_string(),
            email: email.into().trim().to_lowercase(),
            password: None,
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let customer = Customer {
            id: 1,
            first_name: "Dana".into(),
            last_name: "Levi".into(),
            email: "dana@test.com".into(),
        };
        assert_eq!(customer.full_name(), "Dana Levi");

        let nameless = Customer { first_name: String::new(), last_name: String::new(), ..customer };
        assert_eq!(nameless.full_name(), "dana@test.com");
    }

    #[test]
    fn test_payload_validation() {
        assert!(CustomerPayload::new("Dana", "Levi", "dana@test.com").validate().is_ok());
        assert!(CustomerPayload::new(" ", "Levi", "dana@test.com").validate().is_err());
        assert!(CustomerPayload::new("Dana", "Levi", "dana").validate().is_err());
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_value(CustomerPayload::new("Dana", "Levi", "d@test.com")).unwrap();
        assert_eq!(json["firstName"], "Dana");
        assert_eq!(json["lastName"], "Levi");
    }
}
