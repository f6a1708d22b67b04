//! Search Input Component
//!
//! Rounded text box above the blog grid. Every keystroke is reported;
//! debouncing is up to the caller.

use dioxus::prelude::*;

/// Properties for the SearchInput component
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    /// Current search value
    pub value: String,
    /// Handler called on every keystroke with the raw input
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default = "Tìm kiếm bài viết...".to_string())]
    pub placeholder: String,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-container",
            input {
                id: "searchInput",
                class: "search-input",
                r#type: "text",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
