//! Blog page - searchable, filterable, sortable grid of post cards.
//!
//! The card collection in context owns the view state. This page feeds it
//! user input and mirrors each recomputation onto the cards through a
//! [`GridSurface`].

use devblog_core::{Activation, CardCollection, CardSurface, DisplayMode};
use devblog_ui::{FilterPills, SearchInput, SortSelect, ViewToggle};
use dioxus::prelude::*;
use tokio::time::Instant;

use crate::components::{BackToTop, BlogCard, NavHeader, NavLocation};
use crate::context::use_collection;

/// Card classes and element order for one render of the grid.
#[derive(Debug, Clone, PartialEq)]
struct GridSurface {
    hidden: Vec<bool>,
    entering: Vec<bool>,
    order: Vec<usize>,
    list: bool,
}

impl GridSurface {
    fn new(len: usize) -> Self {
        Self {
            hidden: vec![false; len],
            entering: vec![false; len],
            order: (0..len).collect(),
            list: false,
        }
    }

    fn card_class(&self, index: usize) -> String {
        let mut class = String::from("blog-card");
        if self.hidden[index] {
            class.push_str(" hidden");
        }
        if self.entering[index] {
            class.push_str(" entering");
        }
        class
    }

    fn container_class(&self) -> &'static str {
        if self.list {
            "blog-grid list-view"
        } else {
            "blog-grid"
        }
    }
}

impl CardSurface for GridSurface {
    fn set_hidden(&mut self, index: usize, hidden: bool) {
        self.hidden[index] = hidden;
    }

    fn mark_entering(&mut self, index: usize) {
        self.entering[index] = true;
    }

    fn reorder(&mut self, order: &[usize]) {
        self.order = order.to_vec();
    }

    fn set_list_mode(&mut self, list: bool) {
        self.list = list;
    }
}

fn search_is_due(collection: &CardCollection, now: Instant) -> bool {
    collection.search_deadline().is_some_and(|d| d <= now)
}

/// Apply the pending search term once `deadline` passes, unless a newer
/// keystroke moved the deadline.
async fn settle_search_at(mut collection: Signal<CardCollection>, deadline: Instant) {
    tokio::time::sleep_until(deadline).await;
    if search_is_due(&collection.peek(), Instant::now()) {
        collection.write().settle_search(Instant::now());
    }
}

/// Blog page component.
#[component]
pub fn Blog() -> Element {
    let navigator = use_navigator();
    let mut collection = use_collection();
    let mut search_text = use_signal(|| {
        let view = collection.peek();
        view.pending_search()
            .unwrap_or(&view.state().search_term)
            .to_string()
    });
    let categories = use_hook(|| collection.peek().categories());

    // A keystroke typed just before leaving the page still settles
    use_hook(move || {
        if let Some(deadline) = collection.peek().search_deadline() {
            spawn(settle_search_at(collection, deadline));
        }
    });

    // Keystrokes restart the quiet period; only the last one settles
    let on_search = move |term: String| {
        search_text.set(term.clone());
        let deadline = collection.write().search_input(&term, Instant::now());
        spawn(settle_search_at(collection, deadline));
    };

    let on_filter = move |tag: String| {
        collection.write().set_filter(&tag);
    };

    let on_sort = move |value: String| {
        if collection.write().set_sort(&value).is_none() {
            tracing::debug!(value = %value, "Ignoring unknown sort value");
        }
    };

    let on_view = move |mode: DisplayMode| collection.write().set_display_mode(mode);

    let activate = move |index: usize, activation: Activation| {
        let link = collection
            .peek()
            .activate(index, &activation)
            .map(str::to_string);
        if let Some(link) = link {
            navigator.push(link);
        }
    };

    let view = collection.read();
    let mut surface = GridSurface::new(view.len());
    view.render_to(&mut surface);
    let state = view.state().clone();
    let visible_count = view.visible_count();
    let cards: Vec<_> = surface
        .order
        .iter()
        .map(|&index| (index, view.cards()[index].clone(), surface.card_class(index)))
        .collect();
    drop(view);

    rsx! {
        NavHeader { current: NavLocation::Blog }

        main {
            section { id: "blog", class: "blog-section",
                div { class: "container",
                    div { class: "section-header",
                        h2 { class: "section-title", "Blog" }
                        p { class: "section-subtitle", "Ghi chép về DevOps, backend và cloud" }
                    }

                    SearchInput { value: search_text(), oninput: on_search }

                    div { class: "blog-toolbar",
                        FilterPills {
                            categories: categories.clone(),
                            selected: state.filter.as_str().to_string(),
                            on_select: on_filter,
                        }
                        div { class: "blog-controls",
                            SortSelect { selected: state.sort, on_change: on_sort }
                            ViewToggle { mode: state.display_mode, on_change: on_view }
                        }
                    }

                    div { id: "blogGrid", class: "{surface.container_class()}",
                        for (index, card, class) in cards.into_iter() {
                            BlogCard {
                                key: "{index}",
                                card,
                                class,
                                on_activate: move |activation| activate(index, activation),
                            }
                        }
                    }

                    if visible_count == 0 {
                        p { class: "blog-empty", "Không tìm thấy bài viết phù hợp." }
                    }
                }
            }
        }

        BackToTop {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devblog_core::{RawCard, SiteConfig};
    use std::time::Duration;

    fn raw(category: &str, read_time: &str) -> RawCard {
        RawCard {
            category: category.to_string(),
            title: format!("{} post", category),
            excerpt: String::new(),
            date: "01/01/2024".to_string(),
            read_time: read_time.to_string(),
            link: format!("/blog/{}", category),
        }
    }

    fn collection() -> CardCollection {
        CardCollection::from_raw(
            vec![raw("devops", "9 min"), raw("backend", "3 min"), raw("cloud", "5 min")],
            &SiteConfig::default(),
        )
    }

    #[test]
    fn hidden_cards_get_hidden_class() {
        let mut cards = collection();
        cards.set_filter("backend");

        let mut surface = GridSurface::new(cards.len());
        cards.render_to(&mut surface);

        assert_eq!(surface.card_class(0), "blog-card hidden");
        assert_eq!(surface.card_class(2), "blog-card hidden");
        assert!(!surface.card_class(1).contains("hidden"));
    }

    #[test]
    fn reshown_cards_enter() {
        let mut cards = collection();
        cards.set_filter("backend");
        cards.set_filter("all");

        let mut surface = GridSurface::new(cards.len());
        cards.render_to(&mut surface);

        assert_eq!(surface.card_class(0), "blog-card entering");
        assert_eq!(surface.card_class(1), "blog-card");
    }

    #[test]
    fn surface_follows_sort_and_mode() {
        let mut cards = collection();
        cards.set_sort("shortest");
        cards.set_display_mode(DisplayMode::List);

        let mut surface = GridSurface::new(cards.len());
        cards.render_to(&mut surface);

        assert_eq!(surface.order, vec![1, 2, 0]);
        assert_eq!(surface.container_class(), "blog-grid list-view");
    }

    #[test]
    fn search_is_due_only_after_deadline() {
        let mut cards = collection();
        let start = Instant::now();
        assert!(!search_is_due(&cards, start));

        let deadline = cards.search_input("cloud", start);
        assert!(!search_is_due(&cards, start + Duration::from_millis(10)));
        assert!(search_is_due(&cards, deadline));
        assert!(search_is_due(&cards, deadline + Duration::from_secs(3)));

        cards.settle_search(deadline + Duration::from_secs(3));
        assert!(!search_is_due(&cards, deadline + Duration::from_secs(3)));
        assert_eq!(cards.visible_count(), 1);
    }
}
