//! # Identity provider abstraction
//!
//! The external identity provider owns account creation, credential checks,
//! and token issuance; this crate only observes it. [`IdentityProvider`] is
//! the contract the session layer needs: a change subscription, token
//! retrieval for a given identity, and the sign-in/sign-up/sign-out entry
//! points that the UI calls through [`crate::SessionManager`].
//!
//! Provider failures are the only fatal ones in the session layer — they
//! propagate to the caller for display, unlike backend directory failures
//! which degrade to a fallback record.

use std::future::Future;

use thiserror::Error;
use tokio::sync::mpsc;

/// A verified account at the identity provider. Created and destroyed by the
/// provider; the session layer never mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    /// Opaque subject id (the provider's stable account key).
    pub subject: String,
    pub display_name: Option<String>,
    pub email: String,
    pub photo_url: Option<String>,
}

/// Profile fields the client may set right after sign-up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

/// Failure at the identity provider itself.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IdentityError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("identity provider error: {0}")]
    Provider(String),
}

/// Contract with the external identity provider.
///
/// `subscribe` delivers `None` when the account signs out and
/// `Some(identity)` when one signs in (or its token refreshes), in the order
/// the provider emits them.
pub trait IdentityProvider {
    fn subscribe(&self) -> mpsc::UnboundedReceiver<Option<Identity>>;

    /// Obtain a fresh bearer token for a signed-in identity.
    fn token_for(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<String, IdentityError>> + Send;

    fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Identity, IdentityError>> + Send;

    fn sign_up_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Identity, IdentityError>> + Send;

    /// Federated ("continue with Google") sign-in.
    fn sign_in_with_federated(&self) -> impl Future<Output = Result<Identity, IdentityError>> + Send;

    /// Set display name / avatar on a freshly created identity. Returns the
    /// updated identity.
    fn update_profile(
        &self,
        identity: &Identity,
        update: ProfileUpdate,
    ) -> impl Future<Output = Result<Identity, IdentityError>> + Send;

    fn sign_out(&self) -> impl Future<Output = Result<(), IdentityError>> + Send;
}
