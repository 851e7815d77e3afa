//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod storage;
pub use storage::make_storage;

pub mod views;

pub const COMPONENTS_CSS: Asset = asset!("/assets/styling/components.css");

mod auth;
pub use auth::{use_auth, use_session, AuthState, LogoutButton, Session, SessionCommand, SessionProvider};

mod guard;
pub use guard::{use_guard, AuthGate, GuardState};

pub mod notifications;
pub use notifications::{notify, use_notifications, Notifications, ToastKind, Toaster};

mod sidebar;
pub use sidebar::{DashboardPage, DashboardSidebar};
