//! # Session crate — identity reconciliation for the ClubHub client
//!
//! Owns the one piece of client state everything else reads: who, if anyone,
//! is signed in. The [`SessionManager`] subscribes to identity-change
//! notifications from an [`IdentityProvider`], exchanges each verified
//! identity for the backend [`Directory`]'s user record (falling back to a
//! degraded record when the backend is unreachable), and publishes the
//! resulting [`AuthState`] through a watch channel with exactly one writer.
//!
//! [`evaluate_route`] is the pure route-guard decision consumed by whatever
//! shell embeds this crate.

pub mod directory;
pub mod guard;
pub mod identity;
mod manager;
mod state;

pub use directory::{Directory, DirectoryError};
pub use guard::{dashboard_path, evaluate_route, RouteOutcome};
pub use identity::{Identity, IdentityError, IdentityProvider, ProfileUpdate};
pub use manager::{SessionManager, DEFAULT_LOOKUP_TIMEOUT};
pub use state::AuthState;
