//! SessionManager against a mocked gateway.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use common::user;
use coupon_client::{AuthGateway, ClientError, LoginRedirect, SessionManager};
use coupon_core::{AuthSession, ClientType, Credentials, DomainError, SessionStore, TokenPair};
use coupon_infrastructure::MemoryStore;
use mockall::mock;

mock! {
    pub Gateway {}

    #[async_trait]
    impl AuthGateway for Gateway {
        async fn login(&self, credentials: &Credentials) -> Result<AuthSession, ClientError>;
        async fn refresh(&self, refresh_token: &str) -> Result<AuthSession, ClientError>;
    }
}

fn memory_store() -> SessionStore {
    SessionStore::new(Arc::new(MemoryStore::new()))
}

fn session(access: &str, refresh: &str, role: ClientType) -> AuthSession {
    AuthSession {
        access_token: access.to_string(),
        refresh_token: refresh.to_string(),
        user: user(1, role),
    }
}

fn credentials_for(role: ClientType) -> Credentials {
    match role {
        ClientType::Admin => Credentials::new("admin@admin.com", "admin"),
        ClientType::Company => Credentials::new("company@test.com", "company123"),
        ClientType::Customer => Credentials::new("customer@test.com", "customer123"),
    }
}

#[tokio::test]
async fn login_sets_exactly_one_role_flag() {
    for role in ClientType::ALL {
        let mut gateway = MockGateway::new();
        gateway
            .expect_login()
            .times(1)
            .returning(move |_| Ok(session("acc", "ref", role)));

        let manager = SessionManager::new(gateway, memory_store());
        manager.login(&credentials_for(role)).await.unwrap();

        let flags = [manager.is_admin(), manager.is_company(), manager.is_customer()];
        assert_eq!(flags.iter().filter(|f| **f).count(), 1, "role {}", role);
        assert_eq!(manager.role(), Some(role));
        assert!(manager.is_authenticated());
    }
}

#[tokio::test]
async fn login_persists_new_distinct_tokens() {
    let store = memory_store();
    store
        .save_tokens(&TokenPair { access_token: "old-acc".into(), refresh_token: "old-ref".into() })
        .unwrap();

    let mut gateway = MockGateway::new();
    gateway
        .expect_login()
        .withf(|c: &Credentials| c.email == "customer@test.com" && c.password == "customer123")
        .times(1)
        .returning(|_| Ok(session("new-acc", "new-ref", ClientType::Customer)));

    let manager = SessionManager::new(gateway, store.clone());
    let user = manager
        .login(&Credentials::new("customer@test.com", "customer123"))
        .await
        .unwrap();
    assert_eq!(user.client_type, ClientType::Customer);

    let access = store.access_token().unwrap().unwrap();
    let refresh = store.refresh_token().unwrap().unwrap();
    assert!(!access.is_empty() && !refresh.is_empty());
    assert_ne!(access, "old-acc");
    assert_ne!(refresh, "old-ref");
    assert_eq!(store.user_info().unwrap(), Some(user));
}

#[tokio::test]
async fn failed_login_commits_nothing() {
    let store = memory_store();
    let mut gateway = MockGateway::new();
    gateway.expect_login().times(1).returning(|_| {
        Err(ClientError::Api { status: 401, message: "Invalid credentials".into() })
    });

    let manager = SessionManager::new(gateway, store.clone());
    let mut observer = manager.subscribe();

    let err = manager
        .login(&Credentials::new("customer@test.com", "nope"))
        .await
        .unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("error should pass through unchanged, got {:?}", other),
    }

    assert!(store.is_empty().unwrap());
    assert!(!manager.is_authenticated());
    assert!(!observer.has_changed().unwrap());
}

#[tokio::test]
async fn invalid_credentials_never_reach_the_gateway() {
    let mut gateway = MockGateway::new();
    gateway.expect_login().times(0);

    let manager = SessionManager::new(gateway, memory_store());
    let err = manager
        .login(&Credentials::new("not-an-email", "secret"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Domain(DomainError::ValidationError(_))));
}

#[tokio::test]
async fn logout_is_idempotent() {
    let store = memory_store();
    let mut gateway = MockGateway::new();
    gateway
        .expect_login()
        .returning(|_| Ok(session("acc", "ref", ClientType::Company)));

    let manager = SessionManager::new(gateway, store.clone());
    manager.logout().unwrap();

    manager.login(&credentials_for(ClientType::Company)).await.unwrap();
    for _ in 0..3 {
        manager.logout().unwrap();
        assert!(store.is_empty().unwrap());
        assert!(!manager.is_authenticated());
        assert!(manager.current_user().is_none());
    }
}

#[tokio::test]
async fn restores_persisted_identity_without_network() {
    let store = memory_store();
    store.save_user_info(&user(4, ClientType::Admin)).unwrap();

    let mut gateway = MockGateway::new();
    gateway.expect_login().times(0);
    gateway.expect_refresh().times(0);

    let manager = SessionManager::new(gateway, store);
    assert!(manager.is_admin());
    assert_eq!(manager.current_user().unwrap().id, 4);
}

#[tokio::test]
async fn unreadable_identity_starts_logged_out() {
    let inner = Arc::new(MemoryStore::new());
    coupon_core::KeyValueStore::set(inner.as_ref(), "userInfo", "{broken").unwrap();

    let manager = SessionManager::new(MockGateway::new(), SessionStore::new(inner));
    assert!(!manager.is_authenticated());
}

#[tokio::test]
async fn refresh_replaces_session_and_keeps_role() {
    let store = memory_store();
    store.save_session(&session("acc-1", "ref-1", ClientType::Company)).unwrap();

    let mut gateway = MockGateway::new();
    gateway
        .expect_refresh()
        .withf(|token: &str| token == "ref-1")
        .times(1)
        .returning(|_| Ok(session("acc-2", "ref-2", ClientType::Company)));

    let manager = SessionManager::new(gateway, store.clone());
    let mut observer = manager.subscribe();

    let user = manager.refresh_token().await.unwrap();
    assert_eq!(user.client_type, ClientType::Company);
    assert!(manager.is_company());
    assert_eq!(store.access_token().unwrap().as_deref(), Some("acc-2"));
    assert_eq!(store.refresh_token().unwrap().as_deref(), Some("ref-2"));

    assert!(observer.has_changed().unwrap());
    assert_eq!(observer.borrow_and_update().as_ref(), Some(&user));
}

#[tokio::test]
async fn refresh_without_token_fails_fast_and_logs_out() {
    let store = memory_store();
    store.save_user_info(&user(2, ClientType::Customer)).unwrap();

    let mut gateway = MockGateway::new();
    gateway.expect_refresh().times(0);

    let manager = SessionManager::new(gateway, store.clone());
    assert!(manager.is_authenticated());

    let err = manager.refresh_token().await.unwrap_err();
    assert!(matches!(err, ClientError::MissingRefreshToken));
    assert!(!manager.is_authenticated());
    assert!(store.is_empty().unwrap());
}

#[tokio::test]
async fn refresh_failure_logs_out_before_returning() {
    let store = memory_store();
    store.save_session(&session("acc-1", "ref-1", ClientType::Customer)).unwrap();

    let mut gateway = MockGateway::new();
    gateway.expect_refresh().times(1).returning(|_| {
        Err(ClientError::Api { status: 403, message: "Refresh token expired".into() })
    });

    let manager = SessionManager::new(gateway, store.clone());
    let err = manager.refresh_token().await.unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert!(store.is_empty().unwrap());
    assert!(manager.current_user().is_none());
}

#[tokio::test]
async fn observers_see_login_and_logout() {
    let mut gateway = MockGateway::new();
    gateway
        .expect_login()
        .returning(|_| Ok(session("acc", "ref", ClientType::Customer)));

    let manager = SessionManager::new(gateway, memory_store());
    let mut observer = manager.subscribe();
    assert!(observer.borrow().is_none());

    manager.login(&credentials_for(ClientType::Customer)).await.unwrap();
    assert!(observer.has_changed().unwrap());
    assert!(observer.borrow_and_update().as_ref().unwrap().is_customer());

    manager.logout().unwrap();
    assert!(observer.has_changed().unwrap());
    assert!(observer.borrow_and_update().is_none());
}

#[derive(Default)]
struct Noop;

impl LoginRedirect for Noop {
    fn redirect_to_login(&self) {}
}

#[tokio::test]
async fn expiry_hook_publishes_empty_session() {
    let store = memory_store();
    store.save_user_info(&user(2, ClientType::Customer)).unwrap();

    let manager = SessionManager::new(MockGateway::new(), store.clone());
    let hook = manager.expiry_hook(Arc::new(Noop));

    store.clear().unwrap();
    hook.redirect_to_login();

    assert!(!manager.is_authenticated());
    assert!(manager.reload().is_none());
}

#[tokio::test]
async fn interceptor_expiry_reaches_manager_observers() {
    use common::{api, Harness};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    let h = Harness::start().await.with_tokens("stale-access", "revoked");
    h.store.save_user_info(&user(3, ClientType::Company)).unwrap();

    let manager = SessionManager::new(h.client.clone(), h.store.clone());
    let client = h.client.clone().with_redirect(manager.expiry_hook(h.redirect.clone()));
    let mut observer = manager.subscribe();
    assert!(manager.is_company());

    Mock::given(method("GET"))
        .and(path(api("/company/details")))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&h.server)
        .await;
    Mock::given(method("POST"))
        .and(path(api("/auth/refresh")))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&h.server)
        .await;

    let err = client.company().details().await.unwrap_err();
    assert!(err.is_session_expired());

    assert!(observer.has_changed().unwrap());
    assert!(observer.borrow_and_update().is_none());
    assert!(!manager.is_authenticated());
    assert!(h.store.is_empty().unwrap());
    assert_eq!(h.redirect.hits(), 1);
}
