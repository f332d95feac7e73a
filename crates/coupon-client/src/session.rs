// ============================================================================
// Coupon Client - Session Manager
// File: crates/coupon-client/src/session.rs
// Description: Single owner of "who is logged in", mirrored into storage
// ============================================================================

use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};
use validator::Validate;

use coupon_core::{ClientType, Credentials, SessionStore, UserInfo};
use coupon_shared::utils::mask_email;

use crate::api::AuthGateway;
use crate::error::{ClientError, Result};
use crate::redirect::LoginRedirect;

pub struct SessionManager<G: AuthGateway> {
    gateway: G,
    store: SessionStore,
    current: Arc<watch::Sender<Option<UserInfo>>>,
}

impl<G: AuthGateway> SessionManager<G> {
    /// Adopts whatever identity is already persisted. No network call is made.
    pub fn new(gateway: G, store: SessionStore) -> Self {
        let initial = load_identity(&store);
        if let Some(user) = &initial {
            info!("Restored session for {} ({})", mask_email(&user.email), user.client_type);
        }
        let (sender, _) = watch::channel(initial);
        Self { gateway, store, current: Arc::new(sender) }
    }

    /// Nothing is persisted or published unless the backend accepts the login.
    pub async fn login(&self, credentials: &Credentials) -> Result<UserInfo> {
        credentials.validate()?;

        let session = self.gateway.login(credentials).await?;
        if let Err(e) = self.store.save_session(&session) {
            if let Err(clear_err) = self.store.clear() {
                warn!("Failed to roll back partial session: {}", clear_err);
            }
            return Err(e.into());
        }

        info!("Logged in as {} ({})", mask_email(&session.user.email), session.user.client_type);
        self.publish(Some(session.user.clone()));
        Ok(session.user)
    }

    /// Idempotent. The empty session is published even if storage fails.
    pub fn logout(&self) -> Result<()> {
        let cleared = self.store.clear();
        if self.is_authenticated() {
            info!("Logged out");
        }
        self.publish(None);
        cleared.map_err(ClientError::from)
    }

    /// Any failure, including a missing refresh token, logs the user out
    /// before the error is returned.
    pub async fn refresh_token(&self) -> Result<UserInfo> {
        match self.try_refresh().await {
            Ok(user) => Ok(user),
            Err(e) => {
                warn!("Session refresh failed, logging out: {}", e);
                if let Err(logout_err) = self.logout() {
                    warn!("Logout after failed refresh also failed: {}", logout_err);
                }
                Err(e)
            }
        }
    }

    async fn try_refresh(&self) -> Result<UserInfo> {
        let refresh_token = self
            .store
            .refresh_token()?
            .ok_or(ClientError::MissingRefreshToken)?;

        let session = self.gateway.refresh(&refresh_token).await?;
        self.store.save_session(&session)?;
        self.publish(Some(session.user.clone()));
        Ok(session.user)
    }

    /// Re-reads storage, for when something else (the HTTP client's expiry
    /// path) changed it behind the manager's back.
    pub fn reload(&self) -> Option<UserInfo> {
        let user = load_identity(&self.store);
        self.publish(user.clone());
        user
    }

    pub fn current_user(&self) -> Option<UserInfo> {
        self.current.borrow().clone()
    }

    pub fn role(&self) -> Option<ClientType> {
        self.current.borrow().as_ref().map(|u| u.client_type)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(ClientType::Admin)
    }

    pub fn is_company(&self) -> bool {
        self.role() == Some(ClientType::Company)
    }

    pub fn is_customer(&self) -> bool {
        self.role() == Some(ClientType::Customer)
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<UserInfo>> {
        self.current.subscribe()
    }

    /// Hook for an [`ApiClient`](crate::ApiClient) that publishes the empty
    /// session to this manager's observers, then delegates to `next`.
    pub fn expiry_hook(&self, next: Arc<dyn LoginRedirect>) -> Arc<dyn LoginRedirect> {
        Arc::new(SessionExpiryHook { current: Arc::clone(&self.current), next })
    }

    fn publish(&self, user: Option<UserInfo>) {
        self.current.send_replace(user);
    }
}

struct SessionExpiryHook {
    current: Arc<watch::Sender<Option<UserInfo>>>,
    next: Arc<dyn LoginRedirect>,
}

impl LoginRedirect for SessionExpiryHook {
    fn redirect_to_login(&self) {
        self.current.send_replace(None);
        self.next.redirect_to_login();
    }
}

/// Unreadable identity is treated as no identity.
fn load_identity(store: &SessionStore) -> Option<UserInfo> {
    match store.user_info() {
        Ok(user) => user,
        Err(e) => {
            warn!("Ignoring unreadable stored identity: {}", e);
            None
        }
    }
}
