use dioxus::prelude::*;
use ui::views::NotFoundView;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! {
        NotFoundView { path: segments.join("/") }
    }
}
