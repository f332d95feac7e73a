//! Shared fixtures for the client integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use coupon_client::{ApiClient, LoginRedirect};
use coupon_core::{ClientType, SessionStore, TokenPair, UserInfo};
use coupon_infrastructure::MemoryStore;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const API_PREFIX: &str = "/api/v1";

#[derive(Default)]
pub struct CountingRedirect {
    hits: AtomicUsize,
}

impl CountingRedirect {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl LoginRedirect for CountingRedirect {
    fn redirect_to_login(&self) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct Harness {
    pub server: MockServer,
    pub store: SessionStore,
    pub client: ApiClient,
    pub redirect: Arc<CountingRedirect>,
}

impl Harness {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let store = SessionStore::new(Arc::new(MemoryStore::new()));
        let redirect = Arc::new(CountingRedirect::default());
        let client = ApiClient::from_base_url(&format!("{}{}", server.uri(), API_PREFIX), store.clone())
            .unwrap()
            .with_redirect(redirect.clone());
        Self { server, store, client, redirect }
    }

    pub fn with_tokens(self, access: &str, refresh: &str) -> Self {
        self.store
            .save_tokens(&TokenPair { access_token: access.into(), refresh_token: refresh.into() })
            .unwrap();
        self
    }
}

pub fn api(path: &str) -> String {
    format!("{}{}", API_PREFIX, path)
}

pub fn user(id: i64, role: ClientType) -> UserInfo {
    let (email, name) = match role {
        ClientType::Admin => ("admin@admin.com", "Administrator"),
        ClientType::Company => ("company@test.com", "Test Company"),
        ClientType::Customer => ("customer@test.com", "Test Customer"),
    };
    UserInfo { id, email: email.into(), name: name.into(), client_type: role }
}

pub fn auth_body(access: &str, refresh: &str, user: &UserInfo) -> Value {
    json!({
        "accessToken": access,
        "refreshToken": refresh,
        "user": user,
    })
}

pub fn coupon_json(id: i64, category: &str, title: &str, price: f64) -> Value {
    json!({
        "id": id,
        "companyID": 1,
        "category": category,
        "title": title,
        "description": "",
        "startDate": "2026-01-01",
        "endDate": "2026-12-31",
        "amount": 10,
        "price": price,
        "image": ""
    })
}
