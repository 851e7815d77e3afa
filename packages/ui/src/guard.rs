//! Route guard for the dashboard.

use dioxus::prelude::*;

use crate::auth::{use_session, AuthState};
use crate::views::LoadingScreen;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Loading,
    Unauthenticated,
    Authenticated,
}

impl GuardState {
    pub fn from_auth(state: &AuthState) -> Self {
        if state.loading {
            GuardState::Loading
        } else if state.user.as_ref().is_some_and(|u| u.has_token()) {
            GuardState::Authenticated
        } else {
            GuardState::Unauthenticated
        }
    }
}

/// Derive the guard state from the session, re-evaluated on every change.
pub fn use_guard() -> Memo<GuardState> {
    let session = use_session();
    use_memo(move || GuardState::from_auth(&session.state()))
}

/// Renders `children` only for an authenticated session.
///
/// While the stored session is being read a loading screen is shown. Once it
/// is known that nobody is signed in, `on_unauthenticated` fires and nothing
/// is rendered.
#[component]
pub fn AuthGate(on_unauthenticated: EventHandler<()>, children: Element) -> Element {
    let guard = use_guard();

    use_effect(move || {
        if guard() == GuardState::Unauthenticated {
            on_unauthenticated.call(());
        }
    });

    match guard() {
        GuardState::Loading => rsx! { LoadingScreen {} },
        GuardState::Unauthenticated => rsx! {},
        GuardState::Authenticated => rsx! { {children} },
    }
}

#[cfg(test)]
mod tests {
    use store::User;

    use super::*;

    fn signed_in(token: &str) -> AuthState {
        AuthState {
            user: Some(User {
                id: None,
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                email: "jane@example.com".to_string(),
                token: token.to_string(),
            }),
            loading: false,
            pending: false,
        }
    }

    #[test]
    fn test_loading_never_redirects() {
        assert_eq!(GuardState::from_auth(&AuthState::default()), GuardState::Loading);
        let mut state = signed_in("t");
        state.loading = true;
        assert_eq!(GuardState::from_auth(&state), GuardState::Loading);
    }

    #[test]
    fn test_states() {
        assert_eq!(
            GuardState::from_auth(&signed_in("t")),
            GuardState::Authenticated
        );
        assert_eq!(
            GuardState::from_auth(&signed_in("")),
            GuardState::Unauthenticated
        );
        let logged_out = AuthState {
            user: None,
            loading: false,
            pending: false,
        };
        assert_eq!(
            GuardState::from_auth(&logged_out),
            GuardState::Unauthenticated
        );
    }

    #[test]
    fn test_pending_keeps_authenticated() {
        let mut state = signed_in("t");
        state.pending = true;
        assert_eq!(GuardState::from_auth(&state), GuardState::Authenticated);
    }
}
