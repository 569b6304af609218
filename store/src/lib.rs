//! # Token store — the persisted session-token slot
//!
//! A ClubHub client holds at most one bearer token at a time: the one issued
//! for the identity it last observed. [`TokenStore`] is the async interface to
//! that single slot, with two implementations:
//!
//! - [`MemoryTokenStore`] — in-memory, for tests and ephemeral sessions.
//! - [`FileTokenStore`] — a single file on disk, so the token survives app
//!   restarts.
//!
//! The slot is written by the session layer when an identity resolves, and
//! cleared on sign-out or whenever the API gateway sees a 401.

mod file_store;
mod memory;

pub use file_store::FileTokenStore;
pub use memory::MemoryTokenStore;

/// Async interface to the single persisted token slot.
pub trait TokenStore {
    /// Read the stored token, if any.
    fn get(&self) -> impl std::future::Future<Output = Option<String>> + Send;
    /// Store a token, replacing any previous one.
    fn put(&self, token: &str) -> impl std::future::Future<Output = ()> + Send;
    /// Remove the stored token.
    fn clear(&self) -> impl std::future::Future<Output = ()> + Send;
}
