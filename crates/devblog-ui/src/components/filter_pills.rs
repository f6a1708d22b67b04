//! Filter Pills Component
//!
//! Horizontal row of category filter buttons.
//! The active button carries the `active` class.

use devblog_core::CategoryFilter;
use dioxus::prelude::*;

/// Label of the "all" button
pub const ALL_LABEL: &str = "Tất cả";

/// Properties for the FilterPills component
#[derive(Clone, PartialEq, Props)]
pub struct FilterPillsProps {
    /// Categories present in the card collection
    pub categories: Vec<String>,
    /// Currently selected filter value ("all" or a category)
    pub selected: String,
    /// Handler called with the filter value of the clicked button
    pub on_select: EventHandler<String>,
}

/// Displays the "all" button followed by one button per category
///
/// # Example
///
/// ```rust,ignore
/// let mut selected = use_signal(|| "all".to_string());
///
/// rsx! {
///     FilterPills {
///         categories: vec!["devops".to_string(), "backend".to_string()],
///         selected: selected(),
///         on_select: move |tag| selected.set(tag)
///     }
/// }
/// ```
#[component]
pub fn FilterPills(props: FilterPillsProps) -> Element {
    let options = filter_options(&props.categories);

    rsx! {
        div {
            class: "blog-filters",
            role: "radiogroup",
            "aria-label": "Category filter",
            for (value, label) in options.into_iter() {
                {
                    let is_selected = props.selected == value;
                    let on_select = props.on_select;
                    let value_clone = value.clone();
                    rsx! {
                        button {
                            key: "{value}",
                            class: if is_selected { "filter-btn active" } else { "filter-btn" },
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            "data-filter": "{value}",
                            onclick: move |_| on_select.call(value_clone.clone()),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

/// Filter values paired with their button labels, "all" first
pub fn filter_options(categories: &[String]) -> Vec<(String, String)> {
    let mut options = vec![(CategoryFilter::ALL.to_string(), ALL_LABEL.to_string())];
    options.extend(
        categories
            .iter()
            .filter(|c| c.as_str() != CategoryFilter::ALL)
            .map(|c| (c.clone(), category_label(c))),
    );
    options
}

/// Display label for a category tag ("devops" -> "DevOps")
pub fn category_label(tag: &str) -> String {
    match tag {
        "devops" => "DevOps".to_string(),
        "backend" => "Backend".to_string(),
        "frontend" => "Frontend".to_string(),
        "cloud" => "Cloud".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}
