// ============================================================================
// Coupon Core - Coupon Entity
// File: crates/coupon-core/src/domain/coupon.rs
// Description: Coupon record, category set and create/update payload
// ============================================================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};

use coupon_shared::constants::{MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, MIN_NAME_LENGTH};
use coupon_shared::EntityId;

use crate::error::DomainError;

/// Coupon category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Food,
    Electricity,
    Restaurant,
    Vacation,
    Sports,
    Fashion,
    Travel,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Electricity,
        Category::Restaurant,
        Category::Vacation,
        Category::Sports,
        Category::Fashion,
        Category::Travel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "FOOD",
            Category::Electricity => "ELECTRICITY",
            Category::Restaurant => "RESTAURANT",
            Category::Vacation => "VACATION",
            Category::Sports => "SPORTS",
            Category::Fashion => "FASHION",
            Category::Travel => "TRAVEL",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| DomainError::UnknownCategory(s.to_string()))
    }
}

/// Coupon as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: EntityId,
    #[serde(rename = "companyID")]
    pub company_id: EntityId,
    pub category: Category,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub amount: i32,
    pub price: f64,
    #[serde(default)]
    pub image: String,
}

impl Coupon {
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.end_date < today
    }

    pub fn in_stock(&self) -> bool {
        self.amount > 0
    }

    /// Purchasable today: started, not expired, stock left.
    pub fn is_available(&self, today: NaiveDate) -> bool {
        self.in_stock() && self.start_date <= today && !self.is_expired(today)
    }
}

/// Create/update form for a coupon. The company is implied by the caller's session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_date_range"))]
pub struct CouponPayload {
    pub category: Category,

    #[validate(length(min = MIN_NAME_LENGTH, max = MAX_NAME_LENGTH, message = "Title must be between 2 and 100 characters"))]
    pub title: String,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH, message = "Description too long"))]
    pub description: String,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[validate(range(min = 0, message = "Amount cannot be negative"))]
    pub amount: i32,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,

    pub image: String,
}

fn validate_date_range(payload: &CouponPayload) -> Result<(), ValidationError> {
    if payload.end_date < payload.start_date {
        let mut err = ValidationError::new("date_range");
        err.message = Some("End date must not be before start date".into());
        return Err(err);
    }
    Ok(())
}

impl From<&Coupon> for CouponPayload {
    fn from(coupon: &Coupon) -> Self {
        Self {
            category: coupon.category,
            title: coupon.title.clone(),
            description: coupon.description.clone(),
            start_date: coupon.start_date,
            end_date: coupon.end_date,
            amount: coupon.amount,
            price: coupon.price,
            image: coupon.image.clone(),
        }
    }
}
