//! # Directory endpoints used during session reconciliation
//!
//! Unlike the feature wrappers, these calls take an explicit bearer token and
//! stay outside the client's global 401 policy: a rejected token here means
//! "the directory doesn't know this session yet (or is down)", which the
//! session layer answers with a fallback record — not a forced sign-out.

use serde::Deserialize;
use store::TokenStore;

use crate::models::{NewUser, UserInfo};
use crate::{ApiClient, ApiError};

/// Wrapper for `GET /auth/me`'s response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct MeResponse {
    pub user: UserInfo,
}

/// `/auth/*` endpoints of the backend directory.
pub struct AuthApi<S> {
    client: ApiClient<S>,
}

impl<S> Clone for AuthApi<S> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
        }
    }
}

impl<S: TokenStore + Send + Sync> AuthApi<S> {
    pub fn new(client: ApiClient<S>) -> Self {
        Self { client }
    }

    /// Exchange a verified identity token for the directory's user record.
    pub async fn me(&self, token: &str) -> Result<UserInfo, ApiError> {
        let response: MeResponse = self.client.get_with_token("/auth/me", token).await?;
        Ok(response.user)
    }

    /// Create the directory record matching a freshly created identity.
    /// The backend no-ops when the record already exists.
    pub async fn register(&self, token: &str, new_user: &NewUser) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .client
            .post_with_token("/auth/register", token, new_user)
            .await?;
        Ok(())
    }
}
