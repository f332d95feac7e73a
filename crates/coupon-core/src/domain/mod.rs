//! # Coupon Core - Domain Module
//! 
//! Records exchanged with the marketplace backend.

pub mod role;
pub mod user;
pub mod company;
pub mod customer;
pub mod coupon;

// Re-export all entities and enums
pub use role::ClientType;
pub use user::{AuthSession, Credentials, TokenPair, UserInfo};
pub use company::{Company, CompanyPayload};
pub use customer::{Customer, CustomerPayload};
pub use coupon::{Category, Coupon, CouponPayload};
