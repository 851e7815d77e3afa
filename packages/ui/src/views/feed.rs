//! Infinite-scroll image gallery.
//!
//! One batch is fetched on mount. After that a sentinel below the grid
//! triggers the next batch each time it scrolls into view, unless a fetch is
//! already running. While the sentinel stays on screen after a batch lands,
//! the next batch follows immediately. Fetches are spawned on this
//! component's scope, so a response that arrives after the page is left is
//! dropped with it.

use api::FeedClient;
use dioxus::prelude::*;
use store::config::FeedConfig;
use store::Feed;

use crate::components::Spinner;
use crate::notifications::{notify, use_notifications, ToastKind};

#[component]
pub fn FeedView(config: FeedConfig) -> Element {
    let client = use_signal(|| FeedClient::from_config(&config));
    let mut feed = use_signal(Feed::new);
    let mut notifications = use_notifications();

    let fetch = move || {
        spawn(async move {
            let client = client.read().clone();
            loop {
                match client.fetch_batch().await {
                    Ok(urls) => {
                        tracing::debug!("Feed batch of {} images", urls.len());
                        if !feed.write().complete(urls) {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Feed fetch failed: {}", e);
                        feed.write().fail();
                        notify(
                            &mut notifications,
                            ToastKind::Destructive,
                            "Error",
                            Some("Failed to load more images. Please try again."),
                        );
                        break;
                    }
                }
            }
        });
    };

    use_hook(move || {
        if feed.write().begin_fetch() {
            fetch();
        }
    });

    let state = feed.read();

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Infinite Scroll" }
            p { class: "page-subtitle", "Scroll down to load more dogs." }

            div {
                class: "feed-grid",
                for image in state.images().iter().cloned() {
                    div {
                        key: "{image.id}",
                        class: "feed-item",
                        img {
                            src: "{image.url}",
                            alt: "Random dog",
                            loading: "lazy",
                        }
                    }
                }
            }

            div {
                class: "feed-sentinel",
                onvisible: move |evt: VisibleEvent| {
                    let visible = evt.is_intersecting().unwrap_or(false);
                    if feed.write().on_sentinel(visible) {
                        fetch();
                    }
                },
                if state.is_loading() {
                    Spinner { size: 24 }
                }
            }
        }
    }
}
