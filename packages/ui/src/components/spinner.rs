use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaSpinner;
use dioxus_free_icons::Icon;

#[component]
pub fn Spinner(#[props(default = 32)] size: u32) -> Element {
    rsx! {
        span {
            class: "spinner",
            Icon { width: size, height: size, icon: FaSpinner }
        }
    }
}
