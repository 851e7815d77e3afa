use dioxus::prelude::*;
use ui::{use_guard, GuardState};

use crate::Route;

/// Centered layout for the login, register and forgot-password pages.
///
/// A visitor who is already signed in is sent on to the dashboard.
#[component]
pub fn AuthLayout() -> Element {
    let guard = use_guard();
    let nav = use_navigator();

    use_effect(move || {
        if guard() == GuardState::Authenticated {
            nav.replace(Route::Dashboard {});
        }
    });

    rsx! {
        div {
            class: "auth-layout",
            div {
                class: "auth-container",
                Outlet::<Route> {}
            }
        }
    }
}
