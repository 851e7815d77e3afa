use dioxus::prelude::*;

use store::AppConfig;
use ui::views::{CrashScreen, LoadingScreen};
use ui::{use_guard, GuardState, Notifications, SessionProvider, Toaster};
use views::{
    AuthLayout, Dashboard, DashboardLayout, DragDrop, ForgotPassword, InfiniteScroll, Login,
    NotFound, Register,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[nest("/auth")]
        #[layout(AuthLayout)]
            #[route("/login")]
            Login {},
            #[route("/register")]
            Register {},
            #[route("/forgot-password")]
            ForgotPassword {},
        #[end_layout]
    #[end_nest]
    #[nest("/dashboard")]
        #[layout(DashboardLayout)]
            #[route("/")]
            Dashboard {},
            #[route("/drag-drop")]
            DragDrop {},
            #[route("/infinite-scroll")]
            InfiniteScroll {},
        #[end_layout]
    #[end_nest]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../second-brain.toml");

fn main() {
    dioxus::launch(App);
}

/// Parse the embedded config, falling back to defaults.
fn load_config() -> AppConfig {
    match AppConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}, using defaults: {}", AppConfig::filename(), e);
            AppConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    use_context_provider(|| config.clone());
    use_context_provider(|| Signal::new(Notifications::default()));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::COMPONENTS_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ErrorBoundary {
            handle_error: |errors: ErrorContext| rsx! {
                CrashScreen { detail: format!("{errors:?}") }
            },
            SessionProvider {
                config: config.clone(),
                Router::<Route> {}
            }
        }
        Toaster {}
    }
}

/// Redirect `/` to the dashboard or the login page once the session is known.
#[component]
fn Root() -> Element {
    let guard = use_guard();
    let nav = use_navigator();

    use_effect(move || match guard() {
        GuardState::Authenticated => {
            nav.replace(Route::Dashboard {});
        }
        GuardState::Unauthenticated => {
            nav.replace(Route::Login {});
        }
        GuardState::Loading => {}
    });

    rsx! {
        LoadingScreen {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = AppConfig::from_toml(CONFIG_TOML).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(load_config(), config);
    }

    #[test]
    fn test_routes() {
        assert_eq!(Route::Login {}.to_string(), "/auth/login");
        assert_eq!(Route::ForgotPassword {}.to_string(), "/auth/forgot-password");
        assert_eq!(Route::DragDrop {}.to_string(), "/dashboard/drag-drop");
        assert_eq!(
            "/dashboard/infinite-scroll".parse::<Route>().ok(),
            Some(Route::InfiniteScroll {})
        );
        assert_eq!(
            "/nope/here".parse::<Route>().ok(),
            Some(Route::NotFound {
                segments: vec!["nope".to_string(), "here".to_string()]
            })
        );
    }
}
