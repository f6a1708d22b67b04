//! View state and the pure view computation.
//!
//! Nothing here touches a renderer. [`visibility`] and [`sort_order`] derive
//! the visible set and the card order from the full card list and a
//! [`ViewState`]; the collection controller feeds the result to whatever
//! surface draws the cards.

use std::cmp::Ordering;
use std::fmt;

use crate::card::Card;

/// Category selection of the filter buttons.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// The "all" sentinel
    #[default]
    All,
    /// A single category tag; unknown tags simply match nothing
    Tag(String),
}

impl CategoryFilter {
    pub const ALL: &'static str = "all";

    /// Interpret a filter button value.
    pub fn parse(tag: &str) -> Self {
        if tag == Self::ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Tag(tag.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL,
            CategoryFilter::Tag(tag) => tag,
        }
    }

    pub fn matches(&self, card: &Card) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Tag(tag) => card.category == *tag,
        }
    }
}

/// Sort selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortCriteria {
    Newest,
    Oldest,
    Shortest,
    Longest,
    /// Source order, until a sort is chosen
    #[default]
    None,
}

impl SortCriteria {
    /// Options offered by the sort control, in display order.
    pub const CHOICES: [SortCriteria; 4] = [
        SortCriteria::Newest,
        SortCriteria::Oldest,
        SortCriteria::Shortest,
        SortCriteria::Longest,
    ];

    /// Parse a sort control value. Unrecognized values yield `None` so the
    /// caller can leave the order alone.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "newest" => Some(SortCriteria::Newest),
            "oldest" => Some(SortCriteria::Oldest),
            "shortest" => Some(SortCriteria::Shortest),
            "longest" => Some(SortCriteria::Longest),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortCriteria::Newest => "newest",
            SortCriteria::Oldest => "oldest",
            SortCriteria::Shortest => "shortest",
            SortCriteria::Longest => "longest",
            SortCriteria::None => "none",
        }
    }

    /// Compare two cards under this criteria.
    ///
    /// Unparseable dates are the oldest possible value and equal to each
    /// other; unparseable read times are 0.
    pub fn compare(&self, a: &Card, b: &Card) -> Ordering {
        match self {
            SortCriteria::Newest => b.published.cmp(&a.published),
            SortCriteria::Oldest => a.published.cmp(&b.published),
            SortCriteria::Shortest => a.read_minutes.cmp(&b.read_minutes),
            SortCriteria::Longest => b.read_minutes.cmp(&a.read_minutes),
            SortCriteria::None => Ordering::Equal,
        }
    }
}

impl fmt::Display for SortCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grid or list presentation of the card container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Grid,
    List,
}

impl DisplayMode {
    /// Parse a view button value; anything but "list" is the grid.
    pub fn parse(value: &str) -> Self {
        if value == "list" {
            DisplayMode::List
        } else {
            DisplayMode::Grid
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Grid => "grid",
            DisplayMode::List => "list",
        }
    }
}

/// The current filter, sort, search and display selections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub filter: CategoryFilter,
    pub sort: SortCriteria,
    /// Case-folded search term; empty matches everything
    pub search_term: String,
    pub display_mode: DisplayMode,
}

impl ViewState {
    /// Store a search term, case-folded.
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_lowercase();
    }
}

/// A card is visible iff it passes the filter AND the search.
pub fn is_visible(card: &Card, state: &ViewState) -> bool {
    state.filter.matches(card) && card.mentions(&state.search_term)
}

/// Visibility of every card, indexed by source position.
pub fn visibility(cards: &[Card], state: &ViewState) -> Vec<bool> {
    cards.iter().map(|card| is_visible(card, state)).collect()
}

/// Stable sort of the current card order under `criteria`.
///
/// `order` holds source indices in their current display order; cards that
/// compare equal keep that relative order.
pub fn sort_order(cards: &[Card], order: &[usize], criteria: SortCriteria) -> Vec<usize> {
    let mut sorted = order.to_vec();
    if criteria != SortCriteria::None {
        sorted.sort_by(|&a, &b| criteria.compare(&cards[a], &cards[b]));
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::RawCard;

    fn card(category: &str, title: &str, date: &str, read_time: &str) -> Card {
        Card::from_raw(RawCard {
            category: category.to_string(),
            title: title.to_string(),
            excerpt: String::new(),
            date: date.to_string(),
            read_time: read_time.to_string(),
            link: format!("/blog/{}", title.to_lowercase()),
        })
    }

    #[test]
    fn filter_parse_recognizes_all() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("devops"),
            CategoryFilter::Tag("devops".to_string())
        );
        assert_eq!(CategoryFilter::parse("devops").as_str(), "devops");
    }

    #[test]
    fn unknown_sort_value_is_rejected() {
        assert_eq!(SortCriteria::parse("newest"), Some(SortCriteria::Newest));
        assert_eq!(SortCriteria::parse("alphabetical"), None);
        assert_eq!(SortCriteria::parse("none"), None);
    }

    #[test]
    fn display_mode_parse() {
        assert_eq!(DisplayMode::parse("list"), DisplayMode::List);
        assert_eq!(DisplayMode::parse("grid"), DisplayMode::Grid);
        assert_eq!(DisplayMode::parse("cards"), DisplayMode::Grid);
    }

    #[test]
    fn visibility_is_filter_and_search() {
        let cards = vec![
            card("rust", "Lifetimes", "01/01/2024", "5 min"),
            card("rust", "Macros", "01/01/2024", "5 min"),
            card("devops", "Lifetimes of pods", "01/01/2024", "5 min"),
        ];
        let mut state = ViewState {
            filter: CategoryFilter::parse("rust"),
            ..Default::default()
        };
        state.set_search_term("LIFETIMES");

        assert_eq!(visibility(&cards, &state), vec![true, false, false]);
    }

    #[test]
    fn empty_search_still_requires_filter() {
        let cards = vec![
            card("rust", "A", "01/01/2024", "5 min"),
            card("devops", "B", "01/01/2024", "5 min"),
        ];
        let state = ViewState {
            filter: CategoryFilter::parse("devops"),
            ..Default::default()
        };
        assert_eq!(visibility(&cards, &state), vec![false, true]);
    }

    #[test]
    fn unparseable_dates_sort_as_oldest() {
        let cards = vec![
            card("x", "Broken", "someday", "1 min"),
            card("x", "Newer", "02/02/2024", "1 min"),
            card("x", "Older", "01/01/2020", "1 min"),
        ];
        let order: Vec<usize> = (0..cards.len()).collect();

        assert_eq!(
            sort_order(&cards, &order, SortCriteria::Newest),
            vec![1, 2, 0]
        );
        assert_eq!(
            sort_order(&cards, &order, SortCriteria::Oldest),
            vec![0, 2, 1]
        );
    }

    #[test]
    fn sort_none_keeps_current_order() {
        let cards = vec![
            card("x", "A", "01/01/2024", "9 min"),
            card("x", "B", "01/01/2023", "1 min"),
        ];
        assert_eq!(sort_order(&cards, &[1, 0], SortCriteria::None), vec![1, 0]);
    }

    #[test]
    fn equal_keys_keep_prior_relative_order() {
        let cards = vec![
            card("x", "A", "01/01/2024", "5 min"),
            card("x", "B", "01/01/2024", "3 min"),
            card("x", "C", "01/01/2024", "5 min"),
        ];
        // Current order C, B, A: the two 5-minute cards stay C before A
        assert_eq!(
            sort_order(&cards, &[2, 1, 0], SortCriteria::Longest),
            vec![2, 0, 1]
        );
    }
}
