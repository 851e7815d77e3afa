use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTriangleExclamation;
use dioxus_free_icons::Icon;

use crate::components::Spinner;

#[component]
pub fn LoadingScreen() -> Element {
    rsx! {
        div {
            class: "screen",
            Spinner { size: 40 }
            p { class: "screen-text", "Loading..." }
        }
    }
}

/// Fallback rendered by the app's error boundary.
#[component]
pub fn CrashScreen(#[props(default)] detail: Option<String>) -> Element {
    if let Some(ref detail) = detail {
        tracing::error!("Render error: {}", detail);
    }

    rsx! {
        div {
            class: "screen",
            Icon { width: 40, height: 40, icon: FaTriangleExclamation }
            h2 { class: "screen-title", "Something went wrong" }
            p { class: "screen-text", "An unexpected error occurred. Please try again." }
            a { class: "button button-primary", href: "/", "Go home" }
        }
    }
}

#[component]
pub fn NotFoundView(path: String) -> Element {
    rsx! {
        div {
            class: "screen",
            h2 { class: "screen-title", "Page not found" }
            p { class: "screen-text", "Nothing lives at /{path}." }
            a { class: "button button-outline", href: "/", "Go home" }
        }
    }
}
