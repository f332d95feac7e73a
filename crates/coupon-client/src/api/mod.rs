//! Role-scoped REST modules. Each method performs exactly one call.

pub mod auth;
pub mod admin;
pub mod company;
pub mod customer;
pub mod public;
pub mod health;

pub use admin::AdminApi;
pub use auth::AuthGateway;
pub use company::CompanyApi;
pub use customer::CustomerApi;
pub use health::HealthStatus;
pub use public::PublicApi;

use crate::http::ApiClient;

impl ApiClient {
    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi::new(self)
    }

    pub fn company(&self) -> CompanyApi<'_> {
        CompanyApi::new(self)
    }

    pub fn customer(&self) -> CustomerApi<'_> {
        CustomerApi::new(self)
    }

    pub fn public(&self) -> PublicApi<'_> {
        PublicApi::new(self)
    }
}
