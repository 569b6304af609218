use api::UserInfo;

/// The current session: the single source of truth for route guards and UI.
///
/// `loading` is `true` only while an identity-change notification is being
/// resolved against the backend directory (and initially, before the first
/// notification arrives).
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}
