//! Authentication endpoints

use async_trait::async_trait;
use tracing::info;

use coupon_core::{AuthSession, Credentials};
use coupon_shared::utils::mask_email;

use crate::error::Result;
use crate::http::{ApiClient, ApiRequest};

const LOGIN_PATH: &str = "auth/login";

/// Backend operations the session manager depends on.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession>;
    async fn refresh(&self, refresh_token: &str) -> Result<AuthSession>;
}

#[async_trait]
impl AuthGateway for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession> {
        info!("Logging in as {}", mask_email(&credentials.email));
        let request = ApiRequest::post(LOGIN_PATH).json(credentials)?.without_refresh();
        self.fetch(request).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<AuthSession> {
        self.refresh_session(refresh_token).await
    }
}
