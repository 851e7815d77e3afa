use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{Avatar, Card, CardDescription, CardHeader, CardTitle};

/// Dashboard home: greeting and profile card for the signed-in user.
#[component]
pub fn ProfileView() -> Element {
    let auth = use_auth();
    let Some(user) = auth.user else {
        return rsx! {};
    };

    let greeting = if user.first_name.is_empty() { "User" } else { user.first_name.as_str() };
    let email = if user.email.is_empty() { "No email provided" } else { user.email.as_str() };

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Welcome, {greeting}!" }

            Card {
                class: "profile-card",
                CardHeader {
                    CardTitle { "User Profile" }
                    CardDescription { "Your account information" }
                }
                div {
                    class: "profile-body",
                    Avatar {
                        src: user.avatar_url(),
                        alt: user.full_name(),
                        initials: user.initials(),
                        class: "avatar-large",
                    }
                    div {
                        class: "profile-text",
                        p { class: "profile-name", "{user.full_name()}" }
                    }
                }
                div {
                    class: "profile-field",
                    h3 { "Email" }
                    p { class: "profile-email", "{email}" }
                }
            }
        }
    }
}
