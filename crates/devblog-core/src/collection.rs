//! Card collection controller.
//!
//! Owns the parsed cards and the single [`ViewState`] of the blog page, and
//! recomputes the visible/ordered sequence whenever an input changes.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  CardCollection                                              │
//! │  ├── cards: Vec<Card>         parsed once, never mutated     │
//! │  ├── state: ViewState         filter / sort / search / mode  │
//! │  ├── order: Vec<usize>        current display sequence       │
//! │  ├── visible: Vec<bool>       indexed by source position     │
//! │  └── search: Debouncer        pending keystrokes             │
//! │                                                              │
//! │  setter ──► view::visibility + view::sort_order ──► ViewUpdate │
//! │                                                   │          │
//! │                                     CardSurface ◄─┘          │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every recomputation starts from the full card list, so setters can be
//! called in any order and calling one twice with the same argument leaves
//! the view as calling it once.

use std::time::Duration;

use tokio::time::Instant;

use crate::card::{Card, RawCard};
use crate::config::SiteConfig;
use crate::timing::Debouncer;
use crate::view::{self, CategoryFilter, DisplayMode, SortCriteria, ViewState};

/// Rendering adapter for the card container.
///
/// The controller never draws anything itself; a front end implements this
/// to mirror a [`ViewUpdate`] onto its card elements.
pub trait CardSurface {
    /// Add or remove the hidden marker on a card.
    fn set_hidden(&mut self, index: usize, hidden: bool);
    /// Start the entrance transition on a card that just became visible.
    fn mark_entering(&mut self, index: usize);
    /// Re-append the card elements in this order.
    fn reorder(&mut self, order: &[usize]);
    /// Toggle the list-mode marker on the container.
    fn set_list_mode(&mut self, list: bool);
}

/// Result of one recomputation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewUpdate {
    /// Source indices in display order (hidden cards included)
    pub order: Vec<usize>,
    /// Visibility indexed by source position
    pub visible: Vec<bool>,
    /// Cards that went from hidden to visible in this update
    pub entering: Vec<usize>,
}

impl ViewUpdate {
    /// Source indices of the visible cards, in display order.
    pub fn visible_in_order(&self) -> Vec<usize> {
        self.order
            .iter()
            .copied()
            .filter(|&i| self.visible[i])
            .collect()
    }

    /// Push this update through a rendering adapter.
    pub fn apply_to<S: CardSurface + ?Sized>(&self, surface: &mut S) {
        for (index, visible) in self.visible.iter().enumerate() {
            surface.set_hidden(index, !visible);
        }
        for &index in &self.entering {
            surface.mark_entering(index);
        }
        surface.reorder(&self.order);
    }
}

/// How a card was activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Pointer click; `from_link` is set when it landed on a link inside the
    /// card, which handles its own navigation.
    Click { from_link: bool },
    /// Key press while the card has focus, by key name
    Key(String),
}

/// Controller for the blog card collection.
#[derive(Debug, Clone)]
pub struct CardCollection {
    cards: Vec<Card>,
    state: ViewState,
    order: Vec<usize>,
    visible: Vec<bool>,
    entering: Vec<usize>,
    search: Debouncer<String>,
}

impl CardCollection {
    /// Create a controller over parsed cards in source order.
    ///
    /// The view starts at filter "all", no sort, empty search, grid mode.
    pub fn new(cards: Vec<Card>, search_quiet: Duration) -> Self {
        let count = cards.len();
        Self {
            cards,
            state: ViewState::default(),
            order: (0..count).collect(),
            visible: vec![true; count],
            entering: Vec::new(),
            search: Debouncer::new(search_quiet),
        }
    }

    /// Parse rendered cards and build a controller with the configured
    /// search quiet period.
    pub fn from_raw(raw: impl IntoIterator<Item = RawCard>, config: &SiteConfig) -> Self {
        let cards: Vec<Card> = raw.into_iter().map(Card::from_raw).collect();
        tracing::debug!("Parsed {} blog cards", cards.len());
        Self::new(cards, config.search_quiet())
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Current display order, hidden cards included.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Cards that entered in the most recent recomputation.
    pub fn entering(&self) -> &[usize] {
        &self.entering
    }

    /// Visible cards with their source index, in display order.
    pub fn visible_cards(&self) -> impl Iterator<Item = (usize, &Card)> + '_ {
        self.order
            .iter()
            .copied()
            .filter(|&i| self.visible[i])
            .map(|i| (i, &self.cards[i]))
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    /// Distinct categories, in order of first appearance.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for card in &self.cards {
            if !categories.contains(&card.category) {
                categories.push(card.category.clone());
            }
        }
        categories
    }

    /// Select a category tag or "all".
    pub fn set_filter(&mut self, tag: &str) -> ViewUpdate {
        self.state.filter = CategoryFilter::parse(tag);
        tracing::debug!(filter = tag, "Filter changed");
        self.recompute()
    }

    /// Apply a settled search term right away.
    ///
    /// Any keystroke still pending in the debouncer is dropped.
    pub fn set_search_term(&mut self, term: &str) -> ViewUpdate {
        self.search.cancel();
        self.state.set_search_term(term);
        tracing::debug!(term = %self.state.search_term, "Search applied");
        self.recompute()
    }

    /// Record a search keystroke. The term is applied by
    /// [`settle_search`](Self::settle_search) once input has been quiet for
    /// the configured period.
    ///
    /// Returns the instant at which this keystroke would settle.
    pub fn search_input(&mut self, term: &str, now: Instant) -> Instant {
        self.search.schedule(term.to_string(), now)
    }

    /// Apply the pending search term if its quiet period is over.
    ///
    /// Returns `None` while a newer keystroke is still counting down or when
    /// nothing is pending.
    pub fn settle_search(&mut self, now: Instant) -> Option<ViewUpdate> {
        let term = self.search.poll(now)?;
        self.state.set_search_term(&term);
        tracing::debug!(term = %self.state.search_term, "Search settled");
        Some(self.recompute())
    }

    /// Deadline of the pending search keystroke, if any.
    pub fn search_deadline(&self) -> Option<Instant> {
        self.search.deadline()
    }

    /// Raw text of the keystroke still waiting to settle.
    pub fn pending_search(&self) -> Option<&str> {
        self.search.pending().map(String::as_str)
    }

    pub fn search_quiet_period(&self) -> Duration {
        self.search.quiet_period()
    }

    /// Select a sort from a sort control value.
    ///
    /// Unrecognized values leave everything untouched and return `None`.
    pub fn set_sort(&mut self, value: &str) -> Option<ViewUpdate> {
        match SortCriteria::parse(value) {
            Some(criteria) => Some(self.sort_by(criteria)),
            None => {
                tracing::debug!(value, "Ignoring unknown sort value");
                None
            }
        }
    }

    /// Reorder by `criteria`. Visibility is not touched.
    pub fn sort_by(&mut self, criteria: SortCriteria) -> ViewUpdate {
        self.state.sort = criteria;
        self.order = view::sort_order(&self.cards, &self.order, criteria);
        self.entering.clear();
        tracing::debug!(sort = %criteria, "Cards reordered");
        self.snapshot()
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.state.display_mode = mode;
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.state.display_mode
    }

    /// Detail link to navigate to when a card is activated.
    ///
    /// Clicks on an inner link and keys other than Enter yield nothing.
    pub fn activate(&self, index: usize, activation: &Activation) -> Option<&str> {
        let triggers = match activation {
            Activation::Click { from_link } => !from_link,
            Activation::Key(key) => key == "Enter",
        };
        if !triggers {
            return None;
        }
        self.cards.get(index).map(|card| card.detail_link.as_str())
    }

    /// The current view as an update.
    pub fn snapshot(&self) -> ViewUpdate {
        ViewUpdate {
            order: self.order.clone(),
            visible: self.visible.clone(),
            entering: self.entering.clone(),
        }
    }

    /// Mirror the full current view, display mode included, onto a surface.
    pub fn render_to<S: CardSurface + ?Sized>(&self, surface: &mut S) {
        surface.set_list_mode(self.state.display_mode == DisplayMode::List);
        self.snapshot().apply_to(surface);
    }

    fn recompute(&mut self) -> ViewUpdate {
        let visible = view::visibility(&self.cards, &self.state);
        self.entering = visible
            .iter()
            .zip(&self.visible)
            .enumerate()
            .filter(|(_, (now, before))| **now && !**before)
            .map(|(index, _)| index)
            .collect();
        self.visible = visible;
        self.order = view::sort_order(&self.cards, &self.order, self.state.sort);
        tracing::trace!(
            visible = self.visible_count(),
            total = self.cards.len(),
            "Card view recomputed"
        );
        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(category: &str, title: &str, date: &str, read_time: &str) -> RawCard {
        RawCard {
            category: category.to_string(),
            title: title.to_string(),
            excerpt: format!("About {}", title),
            date: date.to_string(),
            read_time: read_time.to_string(),
            link: format!("/blog/{}", title.to_lowercase().replace(' ', "-")),
        }
    }

    fn collection(raws: Vec<RawCard>) -> CardCollection {
        CardCollection::from_raw(raws, &SiteConfig::default())
    }

    fn five_cards() -> CardCollection {
        collection(vec![
            raw("a", "One", "01/01/2024", "1 min"),
            raw("a", "Two", "02/01/2024", "2 min"),
            raw("b", "Three", "03/01/2024", "3 min"),
            raw("a", "Four", "04/01/2024", "4 min"),
            raw("b", "Five", "05/01/2024", "5 min"),
        ])
    }

    #[derive(Default)]
    struct RecordingSurface {
        hidden: Vec<usize>,
        entering: Vec<usize>,
        order: Vec<usize>,
        list: Option<bool>,
    }

    impl CardSurface for RecordingSurface {
        fn set_hidden(&mut self, index: usize, hidden: bool) {
            if hidden {
                self.hidden.push(index);
            }
        }

        fn mark_entering(&mut self, index: usize) {
            self.entering.push(index);
        }

        fn reorder(&mut self, order: &[usize]) {
            self.order = order.to_vec();
        }

        fn set_list_mode(&mut self, list: bool) {
            self.list = Some(list);
        }
    }

    #[test]
    fn starts_with_default_view() {
        let cards = five_cards();
        assert_eq!(cards.state(), &ViewState::default());
        assert_eq!(cards.visible_count(), 5);
        assert_eq!(cards.order(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn filter_shows_matching_category_in_source_order() {
        let mut cards = five_cards();
        let update = cards.set_filter("b");
        assert_eq!(update.visible_in_order(), vec![2, 4]);
    }

    #[test]
    fn unknown_tag_matches_nothing() {
        let mut cards = five_cards();
        cards.set_filter("c");
        assert_eq!(cards.visible_count(), 0);
    }

    #[test]
    fn entering_marks_only_newly_visible_cards() {
        let mut cards = five_cards();
        let update = cards.set_filter("b");
        assert!(update.entering.is_empty());

        let update = cards.set_filter("all");
        assert_eq!(update.entering, vec![0, 1, 3]);

        let update = cards.set_filter("all");
        assert!(update.entering.is_empty());
    }

    #[test]
    fn filter_keeps_active_sort() {
        let mut cards = five_cards();
        cards.sort_by(SortCriteria::Newest);
        let update = cards.set_filter("a");
        assert_eq!(update.visible_in_order(), vec![3, 1, 0]);
    }

    #[test]
    fn sort_does_not_touch_visibility() {
        let mut cards = five_cards();
        cards.set_filter("a");
        let before: Vec<bool> = (0..5).map(|i| cards.is_visible(i)).collect();
        let update = cards.set_sort("longest").unwrap();
        assert_eq!(update.visible, before);
        assert_eq!(update.order, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn unknown_sort_is_a_no_op() {
        let mut cards = five_cards();
        cards.sort_by(SortCriteria::Oldest);
        assert!(cards.set_sort("by-title").is_none());
        assert_eq!(cards.state().sort, SortCriteria::Oldest);
        assert_eq!(cards.order(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn shortest_orders_by_read_minutes() {
        let mut cards = collection(vec![
            raw("x", "Three", "01/01/2024", "3 min"),
            raw("x", "Ten", "01/01/2024", "10 min"),
            raw("x", "One", "01/01/2024", "1 min"),
        ]);
        cards.set_sort("shortest");
        let minutes: Vec<u32> = cards.visible_cards().map(|(_, c)| c.read_minutes).collect();
        assert_eq!(minutes, vec![1, 3, 10]);
    }

    #[test]
    fn search_is_case_insensitive_and_conjoined_with_filter() {
        let mut cards = five_cards();
        cards.set_filter("a");
        let update = cards.set_search_term("ABOUT T");
        assert_eq!(update.visible_in_order(), vec![1]);
        assert_eq!(cards.state().search_term, "about t");
    }

    #[test]
    fn all_and_empty_search_show_everything() {
        let mut cards = five_cards();
        cards.set_filter("b");
        cards.set_search_term("five");
        cards.set_filter("all");
        cards.set_search_term("");
        assert_eq!(cards.visible_count(), 5);
    }

    #[test]
    fn settle_search_applies_latest_keystroke_once() {
        let start = Instant::now();
        let mut cards = five_cards();

        cards.search_input("o", start);
        cards.search_input("on", start + Duration::from_millis(50));
        let deadline = cards.search_input("one", start + Duration::from_millis(100));

        assert!(cards.settle_search(start + Duration::from_millis(300)).is_none());
        let update = cards.settle_search(deadline).unwrap();
        assert_eq!(update.visible_in_order(), vec![0]);
        assert!(cards.settle_search(deadline + Duration::from_secs(1)).is_none());
    }

    #[test]
    fn immediate_search_cancels_pending_keystroke() {
        let start = Instant::now();
        let mut cards = five_cards();
        cards.search_input("two", start);
        cards.set_search_term("four");
        assert!(cards.search_deadline().is_none());
        assert!(cards.settle_search(start + Duration::from_secs(1)).is_none());
        assert_eq!(cards.visible_cards().count(), 1);
    }

    #[test]
    fn display_mode_is_presentational() {
        let mut cards = five_cards();
        let before = cards.snapshot();
        cards.set_display_mode(DisplayMode::List);
        assert_eq!(cards.display_mode(), DisplayMode::List);
        assert_eq!(cards.snapshot(), before);
    }

    #[test]
    fn activation_rules() {
        let cards = five_cards();
        assert_eq!(
            cards.activate(0, &Activation::Click { from_link: false }),
            Some("/blog/one")
        );
        assert_eq!(cards.activate(0, &Activation::Click { from_link: true }), None);
        assert_eq!(
            cards.activate(2, &Activation::Key("Enter".to_string())),
            Some("/blog/three")
        );
        assert_eq!(cards.activate(2, &Activation::Key("Tab".to_string())), None);
        assert_eq!(cards.activate(99, &Activation::Click { from_link: false }), None);
    }

    #[test]
    fn categories_in_first_appearance_order() {
        assert_eq!(five_cards().categories(), vec!["a", "b"]);
    }

    #[test]
    fn render_to_mirrors_view_on_surface() {
        let mut cards = five_cards();
        cards.set_filter("b");
        cards.set_display_mode(DisplayMode::List);

        let mut surface = RecordingSurface::default();
        cards.render_to(&mut surface);

        assert_eq!(surface.hidden, vec![0, 1, 3]);
        assert_eq!(surface.order, vec![0, 1, 2, 3, 4]);
        assert_eq!(surface.list, Some(true));
        assert!(surface.entering.is_empty());
    }

    #[test]
    fn rolled_over_dates_sort_by_calendar() {
        let mut cards = collection(vec![
            raw("a", "Old", "01/01/1990", "1 min"),
            raw("a", "Leap", "31/02/2024", "1 min"),
            raw("a", "March", "01/03/2024", "1 min"),
        ]);

        let update = cards.set_sort("newest").unwrap();
        assert_eq!(update.order, vec![1, 2, 0]);
    }

    #[test]
    fn oversized_read_time_sorts_longest() {
        let mut cards = collection(vec![
            raw("a", "Huge", "01/01/2024", "99999999999 min"),
            raw("a", "Short", "01/01/2024", "2 min"),
            raw("a", "Untimed", "01/01/2024", "quick"),
        ]);

        let update = cards.set_sort("longest").unwrap();
        assert_eq!(update.order, vec![0, 1, 2]);
    }

    #[test]
    fn overdue_keystroke_settles_on_late_poll() {
        let mut cards = five_cards();
        let start = Instant::now();
        let deadline = cards.search_input("Three", start);
        assert_eq!(cards.pending_search(), Some("Three"));

        let late = deadline + Duration::from_secs(5);
        assert!(cards.settle_search(late).is_some());
        assert_eq!(cards.visible_count(), 1);
        assert_eq!(cards.search_deadline(), None);
        assert_eq!(cards.pending_search(), None);
    }
}
