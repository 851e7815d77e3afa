//! Transient toast notifications.
//!
//! A `Signal<Notifications>` is provided at the app root. Anything with access
//! to it calls [`notify`]; the [`Toaster`] renders the queue. On the web each
//! toast removes itself after [`TOAST_TIMEOUT_MS`]; a click dismisses it
//! early.

use dioxus::prelude::*;

pub const TOAST_TIMEOUT_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Default,
    Success,
    Destructive,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Default => "toast",
            ToastKind::Success => "toast toast-success",
            ToastKind::Destructive => "toast toast-destructive",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notifications {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl Notifications {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn push(&mut self, kind: ToastKind, title: &str, description: Option<&str>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            title: title.to_string(),
            description: description.map(str::to_string),
        });
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

pub fn notify(
    notifications: &mut Signal<Notifications>,
    kind: ToastKind,
    title: &str,
    description: Option<&str>,
) {
    match kind {
        ToastKind::Destructive => tracing::warn!("{}: {}", title, description.unwrap_or_default()),
        _ => tracing::info!("{}", title),
    }
    let id = notifications.write().push(kind, title, description);
    schedule_dismiss(*notifications, id);
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(mut notifications: Signal<Notifications>, id: u64) {
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
        notifications.write().dismiss(id);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_notifications: Signal<Notifications>, _id: u64) {}

#[component]
pub fn Toaster() -> Element {
    let mut notifications = use_notifications();

    rsx! {
        div {
            class: "toaster",
            for toast in notifications.read().toasts().iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: toast.kind.class(),
                    role: "status",
                    onclick: move |_| notifications.write().dismiss(toast.id),
                    div { class: "toast-title", "{toast.title}" }
                    if let Some(description) = toast.description.clone() {
                        div { class: "toast-description", "{description}" }
                    }
                }
            }
        }
    }
}
