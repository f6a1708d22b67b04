//! Blog Card Component
//!
//! One post card. The card body is focusable and activates on click or
//! Enter; the inner "read more" link navigates on its own.

use devblog_core::{Activation, Card};
use devblog_ui::category_label;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct BlogCardProps {
    pub card: Card,
    /// Classes computed by the card surface (hidden, entering)
    pub class: String,
    /// Card body clicked or a key pressed while focused
    pub on_activate: EventHandler<Activation>,
}

#[component]
pub fn BlogCard(props: BlogCardProps) -> Element {
    let navigator = use_navigator();
    let mut lifted = use_signal(|| false);

    let card = &props.card;
    let on_activate = props.on_activate;
    let link = card.detail_link.clone();
    let class = if lifted() {
        format!("{} lifted", props.class)
    } else {
        props.class.clone()
    };

    rsx! {
        article {
            class: "{class}",
            tabindex: "0",
            "data-category": "{card.category}",
            onmouseenter: move |_| lifted.set(true),
            onmouseleave: move |_| lifted.set(false),
            onclick: move |_| on_activate.call(Activation::Click { from_link: false }),
            onkeydown: move |e: KeyboardEvent| on_activate.call(Activation::Key(e.key().to_string())),

            span { class: "blog-category", "{category_label(&card.category)}" }
            h3 { class: "blog-title", "{card.title}" }
            p { class: "blog-excerpt", "{card.excerpt}" }
            div { class: "blog-meta",
                span { class: "blog-date", "{card.date_text}" }
                span { class: "blog-read-time", "{card.read_time_text}" }
            }
            a {
                class: "blog-link",
                href: "{card.detail_link}",
                onclick: move |e: MouseEvent| {
                    e.stop_propagation();
                    e.prevent_default();
                    navigator.push(link.clone());
                },
                "Đọc tiếp →"
            }
        }
    }
}
