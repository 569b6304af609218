//! # ApiClient — generic authenticated request layer
//!
//! One `reqwest` client shared by every feature wrapper. Two behaviors are
//! cross-cutting and live here rather than in any wrapper:
//!
//! - every outbound request carries `Authorization: Bearer <token>` when the
//!   [`TokenStore`] holds a token;
//! - any 401 response invalidates the whole session: the token is cleared and
//!   the installed [`UnauthorizedHook`] fires (the embedding shell uses it to
//!   navigate to the sign-in page). This is global, not scoped per request.
//!
//! The `*_with_token` variants bypass both behaviors. They exist for session
//! reconciliation, where the token is explicit and a 401 must degrade to a
//! fallback record instead of forcing sign-out.

use std::sync::{Arc, RwLock};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use store::TokenStore;

use crate::{ApiConfig, ApiError};

/// Invoked (at most once per offending response) when the backend rejects
/// the persisted token.
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// Shared request layer for all ClubHub backend calls.
pub struct ApiClient<S> {
    inner: Arc<Inner<S>>,
}

struct Inner<S> {
    http: reqwest::Client,
    base_url: String,
    tokens: S,
    on_unauthorized: RwLock<Option<UnauthorizedHook>>,
}

impl<S> Clone for ApiClient<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl<S: TokenStore + Send + Sync> ApiClient<S> {
    pub fn new(config: ApiConfig, tokens: S) -> Self {
        Self {
            inner: Arc::new(Inner {
                http: reqwest::Client::new(),
                base_url: config.base_url,
                tokens,
                on_unauthorized: RwLock::new(None),
            }),
        }
    }

    /// The token store this client reads from and invalidates.
    pub fn tokens(&self) -> &S {
        &self.inner.tokens
    }

    /// Install the hook fired by the global 401 policy. Replaces any
    /// previously installed hook; clones of this client share it.
    pub fn set_unauthorized_hook(&self, hook: UnauthorizedHook) {
        *self.inner.on_unauthorized.write().unwrap() = Some(hook);
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.inner.http.get(self.url(path))).await
    }

    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.inner.http.get(self.url(path)).query(query))
            .await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.inner.http.post(self.url(path)).json(body))
            .await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.inner.http.put(self.url(path)).json(body))
            .await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.inner.http.patch(self.url(path)).json(body))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.inner.http.delete(self.url(path))).await
    }

    /// GET with an explicit bearer token, outside the global 401 policy.
    pub async fn get_with_token<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
    ) -> Result<T, ApiError> {
        let response = self
            .inner
            .http
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?;
        let response = Self::require_success(response).await?;
        Ok(response.json().await?)
    }

    /// POST with an explicit bearer token, outside the global 401 policy.
    pub async fn post_with_token<T, B>(
        &self,
        path: &str,
        token: &str,
        body: &B,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .inner
            .http
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        let response = Self::require_success(response).await?;
        Ok(response.json().await?)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let request = match self.inner.tokens.get().await {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            tracing::warn!("backend rejected the session token, forcing sign-out");
            self.inner.tokens.clear().await;
            let hook = self.inner.on_unauthorized.read().unwrap().clone();
            if let Some(hook) = hook {
                hook();
            }
            return Err(ApiError::Unauthorized);
        }

        let response = Self::require_success(response).await?;
        Ok(response.json().await?)
    }

    async fn require_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::extract::Json;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use store::MemoryTokenStore;

    use super::*;

    async fn echo_auth(headers: HeaderMap) -> Json<serde_json::Value> {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        Json(serde_json::json!({ "authorization": auth }))
    }

    async fn reject() -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    async fn teapot() -> (StatusCode, Json<serde_json::Value>) {
        (
            StatusCode::IM_A_TEAPOT,
            Json(serde_json::json!({ "message": "out of coffee" })),
        )
    }

    async fn spawn_backend() -> String {
        let app = Router::new()
            .route("/api/echo-auth", get(echo_auth))
            .route("/api/clubs/protected", get(reject))
            .route("/api/teapot", get(teapot));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/api")
    }

    #[tokio::test]
    async fn test_bearer_token_attached_when_present() {
        let base = spawn_backend().await;
        let tokens = MemoryTokenStore::new();
        let client = ApiClient::new(ApiConfig::new(base), tokens.clone());

        // Anonymous request carries no Authorization header
        let body: serde_json::Value = client.get("/echo-auth").await.unwrap();
        assert_eq!(body["authorization"], "");

        tokens.put("session-token").await;
        let body: serde_json::Value = client.get("/echo-auth").await.unwrap();
        assert_eq!(body["authorization"], "Bearer session-token");
    }

    #[tokio::test]
    async fn test_401_clears_token_and_fires_hook() {
        let base = spawn_backend().await;
        let tokens = MemoryTokenStore::new();
        let client = ApiClient::new(ApiConfig::new(base), tokens.clone());

        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        client.set_unauthorized_hook(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        tokens.put("stale-token").await;
        let result: Result<serde_json::Value, _> = client.get("/clubs/protected").await;

        assert!(matches!(result, Err(ApiError::Unauthorized)));
        assert!(tokens.get().await.is_none());
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_explicit_token_request_skips_sign_out_policy() {
        let base = spawn_backend().await;
        let tokens = MemoryTokenStore::new();
        let client = ApiClient::new(ApiConfig::new(base), tokens.clone());

        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        client.set_unauthorized_hook(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        tokens.put("still-valid").await;
        let result: Result<serde_json::Value, _> =
            client.get_with_token("/clubs/protected", "fresh-token").await;

        // The failure surfaces as a plain status error; the persisted session
        // is left alone for the reconciliation fallback to handle.
        assert!(matches!(result, Err(ApiError::Status { status: 401, .. })));
        assert_eq!(tokens.get().await.as_deref(), Some("still-valid"));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_non_2xx_surfaces_backend_message() {
        let base = spawn_backend().await;
        let client = ApiClient::new(ApiConfig::new(base), MemoryTokenStore::new());

        let result: Result<serde_json::Value, _> = client.get("/teapot").await;
        match result {
            Err(ApiError::Status { status, message }) => {
                assert_eq!(status, 418);
                assert_eq!(message, "out of coffee");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }
}
