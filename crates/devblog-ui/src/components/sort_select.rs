//! Sort Select Component

use devblog_core::SortCriteria;
use dioxus::prelude::*;

/// Properties for the SortSelect component
#[derive(Clone, PartialEq, Props)]
pub struct SortSelectProps {
    /// Active sort
    pub selected: SortCriteria,
    /// Handler called with the raw option value on change
    pub on_change: EventHandler<String>,
}

/// Drop-down of sort choices.
///
/// The leading prompt option has an empty value, which the collection
/// treats as "leave the order alone".
#[component]
pub fn SortSelect(props: SortSelectProps) -> Element {
    let selected = props.selected;

    rsx! {
        select {
            id: "sortSelect",
            class: "sort-select",
            onchange: move |e| props.on_change.call(e.value()),
            option { value: "", selected: selected == SortCriteria::None, "Sắp xếp" }
            for criteria in SortCriteria::CHOICES {
                option {
                    key: "{criteria}",
                    value: "{criteria}",
                    selected: selected == criteria,
                    "{sort_label(criteria)}"
                }
            }
        }
    }
}

/// Display label for a sort choice
pub fn sort_label(criteria: SortCriteria) -> &'static str {
    match criteria {
        SortCriteria::Newest => "Mới nhất",
        SortCriteria::Oldest => "Cũ nhất",
        SortCriteria::Shortest => "Đọc nhanh nhất",
        SortCriteria::Longest => "Đọc lâu nhất",
        SortCriteria::None => "Sắp xếp",
    }
}
