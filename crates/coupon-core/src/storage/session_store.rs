// ============================================================================
// Coupon Core - Session Store
// File: crates/coupon-core/src/storage/session_store.rs
// Description: Typed access to the three persisted session keys
// ============================================================================

use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::debug;

use coupon_shared::constants::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, SESSION_KEYS, USER_INFO_KEY};

use super::KeyValueStore;
use crate::domain::{AuthSession, TokenPair, UserInfo};
use crate::error::DomainError;

#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn access_token(&self) -> Result<Option<String>, DomainError> {
        self.non_empty(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Result<Option<String>, DomainError> {
        self.non_empty(REFRESH_TOKEN_KEY)
    }

    pub fn save_tokens(&self, tokens: &TokenPair) -> Result<(), DomainError> {
        self.store.set(ACCESS_TOKEN_KEY, &tokens.access_token)?;
        self.store.set(REFRESH_TOKEN_KEY, &tokens.refresh_token)?;
        Ok(())
    }

    pub fn user_info(&self) -> Result<Option<UserInfo>, DomainError> {
        self.load_json(USER_INFO_KEY)
    }

    pub fn save_user_info(&self, user: &UserInfo) -> Result<(), DomainError> {
        self.save_json(USER_INFO_KEY, user)
    }

    /// Tokens first, identity last, so a reader never sees an identity
    /// without the tokens that belong to it.
    pub fn save_session(&self, session: &AuthSession) -> Result<(), DomainError> {
        self.save_tokens(&session.tokens())?;
        self.save_user_info(&session.user)
    }

    pub fn save_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), DomainError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)
    }

    pub fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DomainError> {
        match self.store.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Removes all session keys. Safe to call with nothing stored.
    pub fn clear(&self) -> Result<(), DomainError> {
        for key in SESSION_KEYS {
            self.store.remove(key)?;
        }
        debug!("Session storage cleared");
        Ok(())
    }

    pub fn is_empty(&self) -> Result<bool, DomainError> {
        for key in SESSION_KEYS {
            if self.store.get(key)?.is_some() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn non_empty(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.store.get(key)?.filter(|v| !v.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClientType;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MapStore(Mutex<HashMap<String, String>>);

    impl KeyValueStore for MapStore {
        fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
            Ok(self.0.lock().unwrap().get(key).cloned())
        }
        fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
            self.0.lock().unwrap().insert(key.to_string(), value.to_string());
            Ok(())
        }
        fn remove(&self, key: &str) -> Result<(), DomainError> {
            self.0.lock().unwrap().remove(key);
            Ok(())
        }
    }

    fn store() -> SessionStore {
        SessionStore::new(Arc::new(MapStore::default()))
    }

    fn session() -> AuthSession {
        AuthSession {
            access_token: "access-1".into(),
            refresh_token: "refresh-1".into(),
            user: UserInfo {
                id: 3,
                email: "customer@test.com".into(),
                name: "Customer".into(),
                client_type: ClientType::Customer,
            },
        }
    }

    #[test]
    fn test_save_and_clear_session() {
        let store = store();
        assert!(store.is_empty().unwrap());

        store.save_session(&session()).unwrap();
        assert_eq!(store.access_token().unwrap().as_deref(), Some("access-1"));
        assert_eq!(store.refresh_token().unwrap().as_deref(), Some("refresh-1"));
        assert_eq!(store.user_info().unwrap(), Some(session().user));

        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.is_empty().unwrap());
        assert!(store.user_info().unwrap().is_none());
    }

    #[test]
    fn test_empty_token_reads_as_missing() {
        let store = store();
        store
            .save_tokens(&TokenPair { access_token: String::new(), refresh_token: "r".into() })
            .unwrap();
        assert!(store.access_token().unwrap().is_none());
        assert_eq!(store.refresh_token().unwrap().as_deref(), Some("r"));
    }

    #[test]
    fn test_corrupt_user_info_is_an_error() {
        let inner = Arc::new(MapStore::default());
        inner.set(USER_INFO_KEY, "{not json").unwrap();
        let store = SessionStore::new(inner);
        assert!(matches!(store.user_info(), Err(DomainError::SerializationError(_))));
    }
}
