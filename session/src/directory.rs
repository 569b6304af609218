//! # Backend directory abstraction
//!
//! The directory maps a verified identity token to the application-level
//! user record (profile + role). Every call here is best-effort from the
//! session layer's point of view: lookups that fail produce a fallback
//! record, registrations that fail are logged and swallowed. Keeping the
//! calls `Result`-returning makes that fallback policy the *caller's*
//! visible choice instead of burying it in a catch-all.

use std::future::Future;

use api::models::NewUser;
use api::{ApiError, AuthApi, UserInfo};
use store::TokenStore;
use thiserror::Error;

/// Failure of a directory call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DirectoryError {
    /// The request never reached the backend (or the response was unreadable).
    #[error("directory unreachable: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("directory returned status {0}")]
    Status(u16),
    /// The bounded lookup wait elapsed.
    #[error("directory lookup timed out")]
    Timeout,
}

impl From<ApiError> for DirectoryError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized => DirectoryError::Status(401),
            ApiError::Status { status, .. } => DirectoryError::Status(status),
            ApiError::Transport(err) if err.is_timeout() => DirectoryError::Timeout,
            ApiError::Transport(err) => DirectoryError::Transport(err.to_string()),
        }
    }
}

/// Contract with the backend directory, reached through the API gateway.
pub trait Directory {
    /// `GET /auth/me`: exchange a bearer token for the user record.
    fn fetch_current_user(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<UserInfo, DirectoryError>> + Send;

    /// `POST /auth/register`: create the record matching a new identity.
    /// Idempotent on the backend side ("already exists" is a no-op there,
    /// an error status here).
    fn register_user(
        &self,
        token: &str,
        new_user: &NewUser,
    ) -> impl Future<Output = Result<(), DirectoryError>> + Send;
}

impl<S: TokenStore + Send + Sync> Directory for AuthApi<S> {
    async fn fetch_current_user(&self, token: &str) -> Result<UserInfo, DirectoryError> {
        Ok(self.me(token).await?)
    }

    async fn register_user(&self, token: &str, new_user: &NewUser) -> Result<(), DirectoryError> {
        Ok(self.register(token, new_user).await?)
    }
}
