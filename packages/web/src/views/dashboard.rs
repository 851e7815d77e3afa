use dioxus::prelude::*;
use store::AppConfig;
use ui::views::{BoardView, DashboardShell, FeedView, ProfileView};
use ui::DashboardPage;

use crate::Route;

fn page_of(route: &Route) -> Option<DashboardPage> {
    match route {
        Route::Dashboard {} => Some(DashboardPage::Home),
        Route::DragDrop {} => Some(DashboardPage::DragDrop),
        Route::InfiniteScroll {} => Some(DashboardPage::InfiniteScroll),
        _ => None,
    }
}

fn route_of(page: DashboardPage) -> Route {
    match page {
        DashboardPage::Home => Route::Dashboard {},
        DashboardPage::DragDrop => Route::DragDrop {},
        DashboardPage::InfiniteScroll => Route::InfiniteScroll {},
    }
}

/// Guarded dashboard layout with the sidebar.
#[component]
pub fn DashboardLayout() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    rsx! {
        DashboardShell {
            active: page_of(&route),
            on_navigate: move |page: DashboardPage| {
                nav.push(route_of(page));
            },
            on_unauthenticated: move |_: ()| {
                nav.replace(Route::Login {});
            },
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        ProfileView {}
    }
}

#[component]
pub fn DragDrop() -> Element {
    rsx! {
        BoardView {}
    }
}

#[component]
pub fn InfiniteScroll() -> Element {
    let config = use_context::<AppConfig>();

    rsx! {
        FeedView { config: config.feed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_pages_map_to_routes() {
        for page in DashboardPage::ALL {
            assert_eq!(page_of(&route_of(page)), Some(page));
        }
        assert_eq!(page_of(&Route::Login {}), None);
    }
}
