//! DevBlog Core Library
//!
//! Renderer-free behavior of the DevBlog personal site.
//!
//! ## Overview
//!
//! The site is a static collection of pages. Everything interactive on it is
//! modeled here as plain state that a front end (the Dioxus app in the root
//! package) drives from user events:
//!
//! - **Card collection**: filter, sort, search and display mode over the blog
//!   post cards, computed as a pure function and pushed through a
//!   [`CardSurface`] adapter
//! - **Timing**: [`Throttle`], [`Debouncer`] and the pre-paint [`FrameHook`]
//! - **Chrome**: navbar scroll style, active section tracking, back-to-top
//!   visibility, the mobile menu and reveal-once animations
//! - **QR widget**: a rendering capability with a single fallback policy
//!
//! ## Quick Start
//!
//! ```ignore
//! use devblog_core::{CardCollection, RawCard, SiteConfig};
//! use tokio::time::Instant;
//!
//! let config = SiteConfig::default();
//! let mut cards = CardCollection::from_raw(devblog_core::content::default_posts(), &config);
//!
//! cards.set_filter("devops");
//! cards.set_sort("newest");
//!
//! // Search keystrokes are debounced; settle once the quiet period passed
//! cards.search_input("docker", Instant::now());
//! // ... 300 ms later
//! cards.settle_search(Instant::now());
//!
//! for card in cards.visible_cards() {
//!     println!("{} ({} min)", card.title, card.read_minutes);
//! }
//! ```

pub mod card;
pub mod chrome;
pub mod collection;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod qr;
pub mod timing;
pub mod view;

// Re-exports
pub use card::{parse_published_date, parse_read_minutes, Card, RawCard};
pub use chrome::{
    anchor_scroll_target, BackToTop, BarWidth, MobileMenu, NavbarStyle, RevealTracker, Section,
    SectionTracker, SkillBars,
};
pub use collection::{Activation, CardCollection, CardSurface, ViewUpdate};
pub use config::SiteConfig;
pub use content::Skill;
pub use error::{SiteError, SiteResult};
pub use qr::{
    fallback_image_url, resolve_qr, QrCapability, QrImage, QrOptions, QrRenderer, SvgQrRenderer,
};
pub use timing::{Debouncer, FrameHook, Throttle};
pub use view::{CategoryFilter, DisplayMode, SortCriteria, ViewState};
