//! Hook fired when the session is irrecoverable and the user must log in again.

use tracing::warn;

use coupon_shared::constants::LOGIN_PATH;

pub trait LoginRedirect: Send + Sync {
    fn redirect_to_login(&self);
}

/// Default hook: records the event and leaves navigation to the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogRedirect;

impl LoginRedirect for LogRedirect {
    fn redirect_to_login(&self) {
        warn!("Session expired, redirecting to {}", LOGIN_PATH);
    }
}
