//! Blog post cards.
//!
//! A [`RawCard`] is a post summary exactly as it appears in rendered markup:
//! the date and read time are still display text. [`Card`] is the parsed
//! form the collection works with. Parsing never fails; text that does not
//! follow the expected shape degrades to a sentinel sort key.

use std::sync::OnceLock;

use chrono::{NaiveDate, TimeDelta};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A post summary as rendered on the blog page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCard {
    /// Category tag used by the filter buttons
    pub category: String,
    /// Post title
    pub title: String,
    /// Short summary shown under the title
    pub excerpt: String,
    /// Publication date in `DD/MM/YYYY` form
    pub date: String,
    /// Free text containing the read time, e.g. "8 phút đọc"
    pub read_time: String,
    /// Detail page link
    pub link: String,
}

/// A parsed post summary.
///
/// Identity is the card's position in the source collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub category: String,
    pub title: String,
    pub excerpt: String,
    /// `None` when the date text could not be parsed; sorts as the oldest value
    pub published: Option<NaiveDate>,
    /// Original date text, kept for display
    pub date_text: String,
    /// 0 when no number could be found in the read-time text
    pub read_minutes: u32,
    /// Original read-time text, kept for display
    pub read_time_text: String,
    pub detail_link: String,
    title_folded: String,
    excerpt_folded: String,
}

impl Card {
    /// Parse a rendered card.
    pub fn from_raw(raw: RawCard) -> Self {
        let date_text = raw.date.trim().to_string();
        let read_time_text = raw.read_time.trim().to_string();
        Self {
            published: parse_published_date(&date_text),
            read_minutes: parse_read_minutes(&read_time_text),
            title_folded: raw.title.to_lowercase(),
            excerpt_folded: raw.excerpt.to_lowercase(),
            category: raw.category,
            title: raw.title,
            excerpt: raw.excerpt,
            date_text,
            read_time_text,
            detail_link: raw.link,
        }
    }

    /// Whether the title or excerpt contains an already case-folded term.
    ///
    /// An empty term matches every card.
    pub fn mentions(&self, folded_term: &str) -> bool {
        folded_term.is_empty()
            || self.title_folded.contains(folded_term)
            || self.excerpt_folded.contains(folded_term)
    }
}

impl From<RawCard> for Card {
    fn from(raw: RawCard) -> Self {
        Card::from_raw(raw)
    }
}

/// Parse a `DD/MM/YYYY` date.
///
/// Returns `None` for the wrong number of `/`-separated tokens or
/// non-numeric tokens. Out-of-range days and months roll over into the
/// neighbouring month or year ("31/02/2024" is 2 March 2024, "0/01/2024"
/// is 31 December 2023), and two-digit years land in the 1900s.
pub fn parse_published_date(text: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = text.trim().split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    let day: i64 = parts[0].trim().parse().ok()?;
    let month: i64 = parts[1].trim().parse().ok()?;
    let mut year: i64 = parts[2].trim().parse().ok()?;
    if (0..100).contains(&year) {
        year += 1900;
    }

    let months = year.checked_mul(12)?.checked_add(month.checked_sub(1)?)?;
    let first_of_month = NaiveDate::from_ymd_opt(
        i32::try_from(months.div_euclid(12)).ok()?,
        u32::try_from(months.rem_euclid(12) + 1).ok()?,
        1,
    )?;
    first_of_month.checked_add_signed(TimeDelta::try_days(day.checked_sub(1)?)?)
}

fn digits() -> &'static Regex {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    DIGITS.get_or_init(|| Regex::new(r"\d+").expect("static pattern"))
}

/// Extract the first integer embedded in read-time text ("8 phút đọc" -> 8).
///
/// Text without digits yields 0; numbers too large to hold saturate.
pub fn parse_read_minutes(text: &str) -> u32 {
    digits()
        .find(text)
        .map(|m| m.as_str().parse().unwrap_or(u32::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(title: &str, date: &str, read_time: &str) -> RawCard {
        RawCard {
            category: "rust".to_string(),
            title: title.to_string(),
            excerpt: "An Excerpt About Ownership".to_string(),
            date: date.to_string(),
            read_time: read_time.to_string(),
            link: "/blog/post".to_string(),
        }
    }

    #[test]
    fn parses_day_month_year() {
        assert_eq!(
            parse_published_date("15/03/2024"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(
            parse_published_date(" 1/1/2023 "),
            NaiveDate::from_ymd_opt(2023, 1, 1)
        );
    }

    #[test]
    fn wrong_token_count_is_unparseable() {
        assert_eq!(parse_published_date("2024-03-15"), None);
        assert_eq!(parse_published_date("15/03"), None);
        assert_eq!(parse_published_date("15/03/2024/1"), None);
        assert_eq!(parse_published_date(""), None);
    }

    #[test]
    fn non_numeric_is_unparseable() {
        assert_eq!(parse_published_date("aa/03/2024"), None);
        assert_eq!(parse_published_date("01/bb/2024"), None);
        assert_eq!(parse_published_date("01/03/"), None);
    }

    #[test]
    fn off_calendar_dates_roll_over() {
        assert_eq!(
            parse_published_date("31/02/2024"),
            NaiveDate::from_ymd_opt(2024, 3, 2)
        );
        assert_eq!(
            parse_published_date("01/13/2024"),
            NaiveDate::from_ymd_opt(2025, 1, 1)
        );
        assert_eq!(
            parse_published_date("0/01/2024"),
            NaiveDate::from_ymd_opt(2023, 12, 31)
        );
        assert_eq!(
            parse_published_date("15/0/2024"),
            NaiveDate::from_ymd_opt(2023, 12, 15)
        );
        assert_eq!(
            parse_published_date("01/01/99"),
            NaiveDate::from_ymd_opt(1999, 1, 1)
        );
    }

    #[test]
    fn read_minutes_takes_first_number() {
        assert_eq!(parse_read_minutes("8 phút đọc"), 8);
        assert_eq!(parse_read_minutes("10 minutes"), 10);
        assert_eq!(parse_read_minutes("about 12-15 min"), 12);
    }

    #[test]
    fn read_minutes_without_digits_is_zero() {
        assert_eq!(parse_read_minutes("quick read"), 0);
        assert_eq!(parse_read_minutes(""), 0);
    }

    #[test]
    fn oversized_read_minutes_saturate() {
        assert_eq!(parse_read_minutes("99999999999999999999 min"), u32::MAX);
    }

    #[test]
    fn card_keeps_display_text() {
        let card = Card::from_raw(raw("Borrowing", " 05/06/2024 ", "7 min read"));
        assert_eq!(card.date_text, "05/06/2024");
        assert_eq!(card.read_time_text, "7 min read");
        assert_eq!(card.read_minutes, 7);
        assert_eq!(card.published, NaiveDate::from_ymd_opt(2024, 6, 5));
    }

    #[test]
    fn mentions_is_case_insensitive_over_title_and_excerpt() {
        let card = Card::from_raw(raw("Async Rust", "01/01/2024", "5 min"));
        assert!(card.mentions("async"));
        assert!(card.mentions("ownership"));
        assert!(card.mentions(""));
        assert!(!card.mentions("python"));
    }
}
