//! # API crate — typed client for the ClubHub backend
//!
//! This crate wraps the ClubHub REST backend in typed Rust calls. Every
//! feature area of the platform has a thin wrapper over the shared
//! [`ApiClient`], which owns the one cross-cutting policy of the whole
//! client: attach the persisted bearer token to every request, and treat any
//! 401 as session-invalidating (clear the token, notify the embedding shell).
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | Generic authenticated JSON request layer and the global 401 policy |
//! | [`config`] | Backend base URL from the environment |
//! | [`models`] | Wire types: users and roles, clubs, events, memberships, payments |
//! | [`auth`] | `/auth/me` and `/auth/register` with an explicit token (used during session reconciliation) |
//! | [`clubs`], [`events`], [`memberships`], [`payments`], [`users`] | Feature endpoint wrappers |

pub mod auth;
pub mod client;
pub mod clubs;
pub mod config;
mod error;
pub mod events;
pub mod memberships;
pub mod models;
pub mod payments;
pub mod users;

pub use auth::AuthApi;
pub use client::ApiClient;
pub use clubs::ClubApi;
pub use config::ApiConfig;
pub use error::ApiError;
pub use events::EventApi;
pub use memberships::MembershipApi;
pub use models::{Role, UserInfo};
pub use payments::PaymentApi;
pub use users::UserApi;
