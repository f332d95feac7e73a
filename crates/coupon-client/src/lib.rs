//! # Coupon Client
//!
//! Authenticated REST client for the coupon marketplace backend: a bearer
//! token interceptor with one-shot refresh, a session manager mirrored into
//! persistent storage, and thin role-scoped API modules.

pub mod api;
pub mod error;
pub mod http;
pub mod redirect;
pub mod session;

pub use api::{AdminApi, AuthGateway, CompanyApi, CustomerApi, HealthStatus, PublicApi};
pub use error::ClientError;
pub use http::{ApiClient, ApiRequest};
pub use redirect::{LogRedirect, LoginRedirect};
pub use session::SessionManager;
