use dioxus::prelude::*;

/// Round avatar image that falls back to initials when the image fails.
#[component]
pub fn Avatar(
    src: String,
    alt: String,
    initials: String,
    #[props(default)] class: String,
) -> Element {
    let mut failed = use_signal(|| false);

    rsx! {
        span {
            class: "avatar {class}",
            if failed() || src.is_empty() {
                span { class: "avatar-fallback", "{initials}" }
            } else {
                img {
                    class: "avatar-image",
                    src: "{src}",
                    alt: "{alt}",
                    onerror: move |_| failed.set(true),
                }
            }
        }
    }
}
