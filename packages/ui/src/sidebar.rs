use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaHouse, FaImages, FaLayerGroup, FaRightFromBracket};
use dioxus_free_icons::Icon;
use store::User;

use crate::auth::LogoutButton;
use crate::components::Avatar;

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

/// Pages reachable from the dashboard sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardPage {
    Home,
    DragDrop,
    InfiniteScroll,
}

impl DashboardPage {
    pub const ALL: [DashboardPage; 3] = [
        DashboardPage::Home,
        DashboardPage::DragDrop,
        DashboardPage::InfiniteScroll,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DashboardPage::Home => "Home",
            DashboardPage::DragDrop => "Drag and Drop",
            DashboardPage::InfiniteScroll => "Infinite Scroll",
        }
    }
}

#[component]
fn PageIcon(page: DashboardPage) -> Element {
    match page {
        DashboardPage::Home => rsx! { Icon { width: 16, height: 16, icon: FaHouse } },
        DashboardPage::DragDrop => rsx! { Icon { width: 16, height: 16, icon: FaLayerGroup } },
        DashboardPage::InfiniteScroll => rsx! { Icon { width: 16, height: 16, icon: FaImages } },
    }
}

#[component]
pub fn DashboardSidebar(
    active: Option<DashboardPage>,
    user: Option<User>,
    on_navigate: EventHandler<DashboardPage>,
) -> Element {
    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        aside {
            class: "sidebar",

            div {
                class: "sidebar-header",
                h1 { class: "sidebar-title", "Second Brain" }
            }

            nav {
                class: "sidebar-nav",
                for page in DashboardPage::ALL {
                    button {
                        key: "{page.label()}",
                        class: if active == Some(page) { "sidebar-item active" } else { "sidebar-item" },
                        onclick: move |_| on_navigate.call(page),
                        PageIcon { page }
                        span { "{page.label()}" }
                    }
                }
            }

            div {
                class: "sidebar-bottom",
                if let Some(ref u) = user {
                    div {
                        class: "sidebar-user",
                        Avatar {
                            src: u.avatar_url(),
                            alt: u.full_name(),
                            initials: u.initials(),
                            class: "avatar-small",
                        }
                        div {
                            class: "sidebar-user-text",
                            span { class: "sidebar-user-name", "{u.full_name()}" }
                            span { class: "sidebar-user-email", "{u.email}" }
                        }
                    }
                }
                LogoutButton {
                    class: "sidebar-item sidebar-logout",
                    Icon { width: 16, height: 16, icon: FaRightFromBracket }
                }
            }
        }
    }
}
