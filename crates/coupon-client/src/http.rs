// ============================================================================
// Coupon Client - Authenticated HTTP Client
// File: crates/coupon-client/src/http.rs
// Description: Bearer-token client with a one-shot refresh on 401
// ============================================================================
//! Every request reads the access token from the session store. A 401 on a
//! request that has not been retried triggers a single refresh through the
//! raw transport, then a single retry with the new token. A failed refresh
//! clears the stored session and fires the [`LoginRedirect`] hook before the
//! error is returned.

use reqwest::{Method, Response, StatusCode, Url};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use coupon_core::{AuthSession, SessionStore, TokenPair};
use coupon_shared::config::ApiSettings;
use coupon_shared::utils::mask_token;
use coupon_shared::ErrorBody;

use crate::error::{ClientError, Result};
use crate::redirect::{LogRedirect, LoginRedirect};

pub(crate) const REFRESH_PATH: &str = "auth/refresh";

/// Retries granted after a refresh. One, so a second 401 reaches the caller.
const MAX_RETRIES: u8 = 1;

/// A request description that can be re-issued. The retry count travels with
/// the value instead of being flagged on a shared request object.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    retries: u8,
    refreshable: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            retries: 0,
            refreshable: true,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Authentication endpoints: a 401 here is a credential error, not an
    /// expired session, so it must not trigger a refresh. No bearer token is
    /// attached either.
    pub fn without_refresh(mut self) -> Self {
        self.refreshable = false;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn retries(&self) -> u8 {
        self.retries
    }

    fn can_refresh(&self) -> bool {
        self.refreshable && self.retries < MAX_RETRIES
    }

    fn retried(&self) -> Self {
        Self { retries: self.retries + 1, ..self.clone() }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: SessionStore,
    redirect: Arc<dyn LoginRedirect>,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings, session: SessionStore) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("coupon-client/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = settings.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: parse_base_url(&settings.base_url)?,
            session,
            redirect: Arc::new(LogRedirect),
        })
    }

    /// Client with transport defaults, mostly for tests and embedding.
    pub fn from_base_url(base_url: &str, session: SessionStore) -> Result<Self> {
        Self::new(
            &ApiSettings { base_url: base_url.to_string(), timeout_seconds: None },
            session,
        )
    }

    pub fn with_redirect(mut self, redirect: Arc<dyn LoginRedirect>) -> Self {
        self.redirect = redirect;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends through the refresh interceptor and rejects non-2xx statuses.
    pub async fn send(&self, request: ApiRequest) -> Result<Response> {
        // Auth endpoints go out without the stored, possibly stale, token.
        let token = if request.refreshable { self.session.access_token()? } else { None };
        let response = self.dispatch(&request, token.as_deref()).await?;

        if response.status() != StatusCode::UNAUTHORIZED || !request.can_refresh() {
            return check_status(response).await;
        }

        debug!("{} {} returned 401, refreshing session", request.method, request.path);
        let tokens = match self.refresh_stored_tokens().await {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!("Session refresh failed: {}", e);
                self.expire_session();
                return Err(e);
            }
        };

        let retry = request.retried();
        let response = self.dispatch(&retry, Some(&tokens.access_token)).await?;
        check_status(response).await
    }

    pub async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// For calls whose response body carries nothing the caller needs.
    pub async fn execute(&self, request: ApiRequest) -> Result<()> {
        self.send(request).await?;
        Ok(())
    }

    /// Calls the refresh endpoint on the raw transport, outside the
    /// interceptor, so a 401 here can never recurse into another refresh.
    pub async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession> {
        let url = self.endpoint(REFRESH_PATH)?;
        debug!("Refreshing session with token {}", mask_token(refresh_token));

        let response = self
            .http
            .post(url)
            .json(&json!({ "refreshToken": refresh_token }))
            .send()
            .await?;
        let response = check_status(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Persists the new pair before returning it, so the retry that follows
    /// always goes out after storage is updated.
    async fn refresh_stored_tokens(&self) -> Result<TokenPair> {
        let refresh_token = self
            .session
            .refresh_token()?
            .ok_or(ClientError::MissingRefreshToken)?;

        let session = self
            .refresh_session(&refresh_token)
            .await
            .map_err(|e| ClientError::RefreshFailed(Box::new(e)))?;

        let tokens = session.tokens();
        self.session.save_tokens(&tokens)?;
        info!("Access token refreshed");
        Ok(tokens)
    }

    /// Storage is cleared before the hook fires and before the error is
    /// handed back, so nobody observes a half-cleared session.
    fn expire_session(&self) {
        if let Err(e) = self.session.clear() {
            warn!("Failed to clear session storage: {}", e);
        }
        self.redirect.redirect_to_login();
    }

    async fn dispatch(&self, request: &ApiRequest, token: Option<&str>) -> Result<Response> {
        let mut url = self.endpoint(&request.path)?;
        if !request.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &request.query {
                pairs.append_pair(key, value);
            }
        }

        debug!(
            method = %request.method,
            url = %url,
            retry = request.retries,
            authenticated = token.is_some(),
            "Sending request"
        );

        let mut builder = self.http.request(request.method.clone(), url);
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        Ok(builder.send().await?)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", path, e)))
    }
}

/// Relative joins only keep the base path when it ends with a slash.
fn parse_base_url(raw: &str) -> Result<Url> {
    let normalized = if raw.ends_with('/') { raw.to_string() } else { format!("{}/", raw) };
    let url = Url::parse(&normalized).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", raw, e)))?;
    if url.cannot_be_a_base() {
        return Err(ClientError::InvalidUrl(raw.to_string()));
    }
    Ok(url)
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = match ErrorBody::message_from(&body) {
        m if m.is_empty() => status.canonical_reason().unwrap_or("Request failed").to_string(),
        m => m,
    };
    Err(ClientError::Api { status: status.as_u16(), message })
}
