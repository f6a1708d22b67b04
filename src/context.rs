//! Context providers for DevBlog.
//!
//! The App component provides the site config, the card collection and the
//! skill list; pages reach them through these hooks.
//!
//! ## Usage
//!
//! ```ignore
//! let mut collection = use_collection();
//! collection.write().set_filter("devops");
//!
//! let config = use_site_config();
//! let quiet = config.search_quiet();
//! ```

use devblog_core::{CardCollection, SiteConfig, Skill};
use dioxus::prelude::*;

/// Hook to access the blog card collection.
///
/// The collection holds the one view state of the blog page, so filter,
/// sort and search selections survive navigating away and back.
pub fn use_collection() -> Signal<CardCollection> {
    use_context::<Signal<CardCollection>>()
}

/// Hook to access the site configuration.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

/// Hook to access the skills shown on the home page.
pub fn use_skills() -> Vec<Skill> {
    use_context::<Vec<Skill>>()
}
