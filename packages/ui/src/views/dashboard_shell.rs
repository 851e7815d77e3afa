use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::guard::AuthGate;
use crate::sidebar::{DashboardPage, DashboardSidebar};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared dashboard layout: route guard, sidebar, and the active page.
///
/// Platform packages provide navigation callbacks and an `Outlet` as children.
#[component]
pub fn DashboardShell(
    /// Page matching the current route, if any.
    active: Option<DashboardPage>,
    /// The router outlet for child routes.
    children: Element,
    /// Called when the user picks a sidebar entry.
    on_navigate: EventHandler<DashboardPage>,
    /// Called once the session is known to be signed out.
    on_unauthenticated: EventHandler<()>,
) -> Element {
    let auth = use_auth();

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        AuthGate {
            on_unauthenticated,
            div {
                class: "dashboard",
                DashboardSidebar {
                    active,
                    user: auth.user.clone(),
                    on_navigate,
                }
                main {
                    class: "dashboard-main",
                    {children}
                }
            }
        }
    }
}
