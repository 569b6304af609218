//! # SessionManager — the identity reconciliation state machine
//!
//! One manager exists per running client. It is the only writer of the
//! [`AuthState`] watch channel and the only writer of the token store.
//!
//! On every identity-change notification:
//!
//! - a `None` identity (sign-out) clears the persisted token and publishes
//!   `{user: None, loading: false}`;
//! - a signed-in identity publishes `loading = true`, obtains and persists a
//!   fresh bearer token, then asks the backend directory for the user record
//!   within a bounded wait. Any failure on that path — token retrieval,
//!   transport, non-2xx, timeout — degrades to a fallback record built from
//!   provider-sourced profile fields with the default `member` role, so the
//!   session always becomes usable and `loading` never sticks.
//!
//! Notifications may overlap: the provider can fire again while a previous
//! directory lookup is still in flight. Every notification takes a sequence
//! number; state commits and token-store writes are both dropped when a
//! newer notification has been observed since, so only the response to the
//! latest notification is ever published and the persisted token always
//! belongs to the last observed identity.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use api::models::NewUser;
use api::{Role, UserInfo};
use store::TokenStore;
use tokio::sync::watch;

use crate::directory::{Directory, DirectoryError};
use crate::identity::{Identity, IdentityError, IdentityProvider, ProfileUpdate};
use crate::state::AuthState;

/// Bounded wait for the directory lookup before falling back.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Owns the current session and keeps it consistent with the identity
/// provider's notifications. Cheap to clone; clones share all state.
pub struct SessionManager<P, S, D> {
    inner: Arc<Inner<P, S, D>>,
}

struct Inner<P, S, D> {
    provider: P,
    tokens: S,
    directory: D,
    state: watch::Sender<AuthState>,
    seq: AtomicU64,
    lookup_timeout: Duration,
}

impl<P, S, D> Clone for SessionManager<P, S, D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P, S, D> SessionManager<P, S, D>
where
    P: IdentityProvider + Send + Sync,
    S: TokenStore + Send + Sync,
    D: Directory + Send + Sync,
{
    pub fn new(provider: P, tokens: S, directory: D) -> Self {
        Self::with_lookup_timeout(provider, tokens, directory, DEFAULT_LOOKUP_TIMEOUT)
    }

    pub fn with_lookup_timeout(
        provider: P,
        tokens: S,
        directory: D,
        lookup_timeout: Duration,
    ) -> Self {
        let (state, _) = watch::channel(AuthState::default());
        Self {
            inner: Arc::new(Inner {
                provider,
                tokens,
                directory,
                state,
                seq: AtomicU64::new(0),
                lookup_timeout,
            }),
        }
    }

    /// Subscribe to session updates. Returns a receiver whose value is
    /// always the latest published [`AuthState`].
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.inner.state.subscribe()
    }

    /// The latest published session state.
    pub fn current(&self) -> AuthState {
        self.inner.state.borrow().clone()
    }

    /// Spawn the subscription loop. Each notification is reconciled on its
    /// own task, exactly as the provider delivers overlapping callbacks; the
    /// sequence guard makes the overlap safe. Runs until the provider closes
    /// the subscription (process teardown).
    pub fn listen(&self) -> tokio::task::JoinHandle<()>
    where
        P: 'static,
        S: 'static,
        D: 'static,
    {
        let mut changes = self.inner.provider.subscribe();
        let manager = self.clone();
        tokio::spawn(async move {
            while let Some(change) = changes.recv().await {
                let manager = manager.clone();
                tokio::spawn(async move {
                    manager.apply_identity_change(change).await;
                });
            }
        })
    }

    /// Drive one identity-change notification through the state machine.
    pub async fn apply_identity_change(&self, identity: Option<Identity>) {
        let seq = self.inner.seq.fetch_add(1, Ordering::SeqCst) + 1;

        match identity {
            None => {
                if self.is_latest(seq) {
                    self.inner.tokens.clear().await;
                }
                self.commit(
                    seq,
                    AuthState {
                        user: None,
                        loading: false,
                    },
                );
            }
            Some(identity) => {
                let previous = self.inner.state.borrow().user.clone();
                self.commit(
                    seq,
                    AuthState {
                        user: previous,
                        loading: true,
                    },
                );
                let user = self.resolve(seq, &identity).await;
                self.commit(
                    seq,
                    AuthState {
                        user: Some(user),
                        loading: false,
                    },
                );
            }
        }
    }

    /// Exchange an identity for the directory record, or the fallback.
    async fn resolve(&self, seq: u64, identity: &Identity) -> UserInfo {
        let token = match self.inner.provider.token_for(identity).await {
            Ok(token) => {
                // A sign-out may have superseded this notification while the
                // token was in flight; persisting would strand a live token.
                if self.is_latest(seq) {
                    self.inner.tokens.put(&token).await;
                }
                token
            }
            Err(err) => {
                tracing::warn!("token retrieval failed, using fallback record: {err}");
                return fallback_record(identity);
            }
        };

        let lookup = self.inner.directory.fetch_current_user(&token);
        match tokio::time::timeout(self.inner.lookup_timeout, lookup).await {
            Ok(Ok(user)) => user,
            Ok(Err(err)) => {
                tracing::warn!("directory lookup failed, using fallback record: {err}");
                fallback_record(identity)
            }
            Err(_) => {
                tracing::warn!(
                    "directory lookup timed out after {:?}, using fallback record",
                    self.inner.lookup_timeout
                );
                fallback_record(identity)
            }
        }
    }

    /// Whether `seq` still belongs to the newest observed notification.
    fn is_latest(&self, seq: u64) -> bool {
        self.inner.seq.load(Ordering::SeqCst) == seq
    }

    /// Publish a state unless a newer notification has been observed.
    fn commit(&self, seq: u64, state: AuthState) -> bool {
        if !self.is_latest(seq) {
            tracing::debug!("dropping session update superseded by a newer notification");
            return false;
        }
        self.inner.state.send_replace(state);
        true
    }

    /// Password sign-in. The resulting identity-change notification drives
    /// the state machine; nothing else to reconcile here.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, IdentityError> {
        self.inner.provider.sign_in_with_password(email, password).await
    }

    /// Sign out at the provider; the `None` notification does the cleanup.
    pub async fn logout(&self) -> Result<(), IdentityError> {
        self.inner.provider.sign_out().await
    }

    /// Create a new identity, set its profile, and best-effort register it
    /// with the backend directory. Directory failure is logged and swallowed:
    /// the provider-side account exists either way, and the next
    /// identity-change notification falls back as needed.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
        photo_url: Option<&str>,
    ) -> Result<Identity, IdentityError> {
        let identity = self
            .inner
            .provider
            .sign_up_with_password(email, password)
            .await?;
        let identity = self
            .inner
            .provider
            .update_profile(
                &identity,
                ProfileUpdate {
                    display_name: Some(name.to_string()),
                    photo_url: Some(photo_url.unwrap_or_default().to_string()),
                },
            )
            .await?;

        if let Err(err) = self.backend_register(&identity, name).await {
            tracing::warn!("backend registration failed: {err}");
        }

        Ok(identity)
    }

    /// Federated sign-in, then an idempotent best-effort directory
    /// registration ("already exists" failures are expected here).
    pub async fn login_with_google(&self) -> Result<Identity, IdentityError> {
        let identity = self.inner.provider.sign_in_with_federated().await?;

        let name = identity
            .display_name
            .clone()
            .unwrap_or_else(|| "Google User".to_string());
        if let Err(err) = self.backend_register(&identity, &name).await {
            tracing::debug!("backend registration skipped (may already exist): {err}");
        }

        Ok(identity)
    }

    async fn backend_register(
        &self,
        identity: &Identity,
        name: &str,
    ) -> Result<(), DirectoryError> {
        let token = self
            .inner
            .provider
            .token_for(identity)
            .await
            .map_err(|err| DirectoryError::Transport(err.to_string()))?;
        let new_user = NewUser {
            name: name.to_string(),
            email: identity.email.clone(),
            photo_url: identity.photo_url.clone().unwrap_or_default(),
            federated_id: identity.subject.clone(),
        };
        self.inner.directory.register_user(&token, &new_user).await
    }
}

/// The degraded record used when the directory cannot be reached: provider
/// profile fields and the default `member` role.
fn fallback_record(identity: &Identity) -> UserInfo {
    UserInfo {
        id: identity.subject.clone(),
        name: identity
            .display_name
            .clone()
            .unwrap_or_else(|| "User".to_string()),
        email: identity.email.clone(),
        photo_url: identity.photo_url.clone(),
        role: Role::Member,
    }
}
