//! View Toggle Component
//!
//! Grid / list layout buttons for the card container.

use devblog_core::DisplayMode;
use dioxus::prelude::*;

/// Properties for the ViewToggle component
#[derive(Clone, PartialEq, Props)]
pub struct ViewToggleProps {
    /// Current layout
    pub mode: DisplayMode,
    /// Handler called with the chosen layout
    pub on_change: EventHandler<DisplayMode>,
}

#[component]
pub fn ViewToggle(props: ViewToggleProps) -> Element {
    rsx! {
        div { class: "view-toggle",
            for mode in [DisplayMode::Grid, DisplayMode::List] {
                button {
                    key: "{mode.as_str()}",
                    class: if props.mode == mode { "view-btn active" } else { "view-btn" },
                    "data-view": mode.as_str(),
                    title: view_label(mode),
                    onclick: move |_| props.on_change.call(mode),
                    span { class: "view-icon", "{view_icon(mode)}" }
                }
            }
        }
    }
}

/// Tooltip for a layout button
pub fn view_label(mode: DisplayMode) -> &'static str {
    match mode {
        DisplayMode::Grid => "Dạng lưới",
        DisplayMode::List => "Dạng danh sách",
    }
}

fn view_icon(mode: DisplayMode) -> &'static str {
    match mode {
        DisplayMode::Grid => "\u{25A6}",
        DisplayMode::List => "\u{2630}",
    }
}
