//! Back-to-top button, shown once the page is scrolled far enough.

use devblog_core::BackToTop as BackToTopState;
use dioxus::prelude::*;

use crate::components::scroll::{scroll_to, use_throttled_scroll};
use crate::context::use_site_config;

#[component]
pub fn BackToTop() -> Element {
    let config = use_site_config();
    let mut button = use_signal(|| BackToTopState::new(config.back_to_top_after));

    use_throttled_scroll(config.back_to_top_throttle(), move |scroll_y| {
        let mut next = button.peek().clone();
        if next.update(scroll_y) {
            button.set(next);
        }
    });

    let css = button().css();

    rsx! {
        button {
            id: "backToTop",
            class: "back-to-top",
            style: "{css}",
            "aria-label": "Back to top",
            onclick: move |_| scroll_to(0.0),
            "↑"
        }
    }
}
