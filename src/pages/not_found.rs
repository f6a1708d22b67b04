use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{NavHeader, NavLocation};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();
    let path = segments.join("/");

    use_effect(move || {
        tracing::warn!(path = %path, "No route for path");
    });

    rsx! {
        NavHeader { current: NavLocation::Post }

        main { class: "post-detail",
            div { class: "container",
                h1 { class: "post-title", "404" }
                p { class: "blog-empty", "Trang không tồn tại." }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        navigator.push(Route::Home {});
                    },
                    "Về trang chủ"
                }
            }
        }
    }
}
