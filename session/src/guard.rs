//! # Route guard — a pure function of the current session
//!
//! Given the session state and a route's required role, decide what the
//! shell should render. No internal state: the same inputs always produce
//! the same outcome.

use api::Role;

use crate::AuthState;

/// What the shell should do with a guarded route.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    /// Resolution is still pending: render a loading placeholder.
    Loading,
    /// Nobody is signed in: go to sign-in, remembering where we came from.
    RedirectToLogin { from: String },
    /// Signed in, but the wrong role for this route: go to the user's own
    /// dashboard instead.
    Redirect { to: String },
    /// Render the guarded content.
    Allow,
}

/// The dashboard root for a role.
pub fn dashboard_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/dashboard/admin",
        Role::ClubManager => "/dashboard/manager",
        Role::Member => "/dashboard/member",
    }
}

/// Decide the outcome for a route that requires `required_role` (or just a
/// signed-in user when `None`), attempted at `attempted_path`.
pub fn evaluate_route(
    state: &AuthState,
    required_role: Option<Role>,
    attempted_path: &str,
) -> RouteOutcome {
    if state.loading {
        return RouteOutcome::Loading;
    }

    let Some(user) = &state.user else {
        return RouteOutcome::RedirectToLogin {
            from: attempted_path.to_string(),
        };
    };

    if let Some(required) = required_role {
        if user.role != required {
            return RouteOutcome::Redirect {
                to: dashboard_path(user.role).to_string(),
            };
        }
    }

    RouteOutcome::Allow
}

#[cfg(test)]
mod tests {
    use api::UserInfo;

    use super::*;

    fn signed_in(role: Role) -> AuthState {
        AuthState {
            user: Some(UserInfo {
                id: "u-1".into(),
                name: "Ada".into(),
                email: "ada@example.com".into(),
                photo_url: None,
                role,
            }),
            loading: false,
        }
    }

    #[test]
    fn test_loading_renders_placeholder() {
        let state = AuthState {
            user: None,
            loading: true,
        };
        assert_eq!(
            evaluate_route(&state, Some(Role::Admin), "/dashboard/admin"),
            RouteOutcome::Loading
        );
    }

    #[test]
    fn test_anonymous_redirects_to_login_preserving_location() {
        let state = AuthState {
            user: None,
            loading: false,
        };
        assert_eq!(
            evaluate_route(&state, None, "/dashboard/member/payments"),
            RouteOutcome::RedirectToLogin {
                from: "/dashboard/member/payments".to_string()
            }
        );
    }

    #[test]
    fn test_wrong_role_goes_to_own_dashboard_not_login() {
        let state = signed_in(Role::Member);
        assert_eq!(
            evaluate_route(&state, Some(Role::Admin), "/dashboard/admin"),
            RouteOutcome::Redirect {
                to: "/dashboard/member".to_string()
            }
        );

        let state = signed_in(Role::ClubManager);
        assert_eq!(
            evaluate_route(&state, Some(Role::Admin), "/dashboard/admin"),
            RouteOutcome::Redirect {
                to: "/dashboard/manager".to_string()
            }
        );
    }

    #[test]
    fn test_matching_role_and_role_free_routes_allow() {
        let state = signed_in(Role::Admin);
        assert_eq!(
            evaluate_route(&state, Some(Role::Admin), "/dashboard/admin"),
            RouteOutcome::Allow
        );
        assert_eq!(evaluate_route(&state, None, "/profile"), RouteOutcome::Allow);
    }
}
