//! Post detail page.

use devblog_ui::category_label;
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{BackToTop, NavHeader, NavLocation};
use crate::context::use_collection;

#[component]
pub fn Post(slug: String) -> Element {
    let navigator = use_navigator();
    let collection = use_collection();

    let link = format!("/blog/{}", slug);
    let card = collection
        .read()
        .cards()
        .iter()
        .find(|c| c.detail_link == link)
        .cloned();

    rsx! {
        NavHeader { current: NavLocation::Post }

        main { class: "post-detail",
            div { class: "container",
                {match card {
                    Some(card) => rsx! {
                        article {
                            span { class: "blog-category", "{category_label(&card.category)}" }
                            h1 { class: "post-title", "{card.title}" }
                            div { class: "blog-meta",
                                span { class: "blog-date", "{card.date_text}" }
                                span { class: "blog-read-time", "{card.read_time_text}" }
                            }
                            p { class: "post-excerpt", "{card.excerpt}" }
                        }
                    },
                    None => rsx! {
                        p { class: "blog-empty", "Không tìm thấy bài viết \"{slug}\"." }
                    },
                }}
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| {
                        navigator.push(Route::Blog {});
                    },
                    "← Quay lại blog"
                }
            }
        }

        BackToTop {}
    }
}
