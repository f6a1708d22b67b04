//! Page chrome: everything outside the card list that reacts to scrolling
//! or clicks.
//!
//! Each piece is a small state object fed by the front end. The throttling
//! of scroll handlers lives with the caller (see [`crate::timing::Throttle`]);
//! these types only decide what the page should look like.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::timing::FrameHook;

/// Navbar look for the current scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavbarStyle {
    #[default]
    Translucent,
    Solid,
}

impl NavbarStyle {
    /// Solid once the page is scrolled strictly past `threshold`.
    pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            NavbarStyle::Solid
        } else {
            NavbarStyle::Translucent
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NavbarStyle::Translucent => "rgba(255, 255, 255, 0.95)",
            NavbarStyle::Solid => "rgba(255, 255, 255, 0.98)",
        }
    }

    pub fn box_shadow(&self) -> &'static str {
        match self {
            NavbarStyle::Translucent => "none",
            NavbarStyle::Solid => "0 2px 20px rgba(0, 0, 0, 0.1)",
        }
    }

    /// Inline style for the navbar element.
    pub fn css(&self) -> String {
        format!(
            "background: {}; box-shadow: {};",
            self.background(),
            self.box_shadow()
        )
    }
}

/// Visibility of the floating back-to-top button.
#[derive(Debug, Clone, PartialEq)]
pub struct BackToTop {
    threshold: f64,
    visible: bool,
}

impl BackToTop {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    /// Update for a scroll offset. Returns whether visibility changed.
    pub fn update(&mut self, scroll_y: f64) -> bool {
        let visible = scroll_y > self.threshold;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Inline style: hidden buttons are transparent and not interactive.
    pub fn css(&self) -> &'static str {
        if self.visible {
            "opacity: 1; visibility: visible;"
        } else {
            "opacity: 0; visibility: hidden;"
        }
    }
}

/// Geometry of a page section with an `id`, as measured by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Tracks which section the nav links should highlight.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionTracker {
    sections: Vec<Section>,
    probe_offset: f64,
    active: Option<String>,
}

impl SectionTracker {
    pub fn new(sections: Vec<Section>, probe_offset: f64) -> Self {
        Self {
            sections,
            probe_offset,
            active: None,
        }
    }

    /// Replace the measured sections (after a resize or page change).
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.sections = sections;
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Re-evaluate the active section for a scroll offset.
    ///
    /// When several sections contain the probe the last one wins. When none
    /// does, the previous highlight stays.
    pub fn update(&mut self, scroll_y: f64) -> Option<&str> {
        if self.sections.is_empty() {
            return None;
        }
        let probe = scroll_y + self.probe_offset;
        if let Some(section) = self.sections.iter().rev().find(|s| s.contains(probe)) {
            self.active = Some(section.id.clone());
        }
        self.active.as_deref()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether a nav link `href` points at the active section.
    pub fn is_active_link(&self, href: &str) -> bool {
        match (&self.active, href.strip_prefix('#')) {
            (Some(active), Some(id)) => active == id,
            _ => false,
        }
    }
}

/// Scroll offset for a same-page anchor link.
///
/// Returns `None` for links to other pages and for anchors with no matching
/// section, which the browser handles on its own.
pub fn anchor_scroll_target(href: &str, sections: &[Section], offset: f64) -> Option<f64> {
    let id = href.strip_prefix('#')?;
    sections
        .iter()
        .find(|section| section.id == id)
        .map(|section| section.top - offset)
}

/// Open/closed state of the hamburger menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following any nav link closes the menu.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Elements that fade in the first time they are seen, and only then.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    /// Record that an element came into view. Returns `true` the first time.
    pub fn reveal(&mut self, id: &str) -> bool {
        self.revealed.insert(id.to_string())
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }
}

/// Target width for a skill bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarWidth {
    pub bar: String,
    pub width: String,
}

/// Skill bars that grow to their width once revealed.
///
/// The width change goes through a [`FrameHook`] so it lands right before
/// a render pass.
#[derive(Debug, Clone)]
pub struct SkillBars {
    seen: RevealTracker,
    frame: FrameHook<BarWidth>,
    widths: HashMap<String, String>,
}

impl SkillBars {
    pub fn new(frame: FrameHook<BarWidth>) -> Self {
        Self {
            seen: RevealTracker::default(),
            frame,
            widths: HashMap::new(),
        }
    }

    /// A bar came into view. Only its first reveal requests a width.
    pub fn reveal(&mut self, bar: &str, width: &str) {
        if !self.seen.reveal(bar) {
            return;
        }
        let mutation = BarWidth {
            bar: bar.to_string(),
            width: width.to_string(),
        };
        if let Some(now) = self.frame.request(mutation) {
            self.widths.insert(now.bar, now.width);
        }
    }

    /// Apply queued widths. Call right before rendering.
    pub fn before_render(&mut self) -> usize {
        let due = self.frame.before_render();
        let count = due.len();
        for mutation in due {
            self.widths.insert(mutation.bar, mutation.width);
        }
        count
    }

    /// Current width of a bar; unrevealed bars are collapsed.
    pub fn width(&self, bar: &str) -> &str {
        self.widths.get(bar).map(String::as_str).unwrap_or("0")
    }
}

impl Default for SkillBars {
    fn default() -> Self {
        Self::new(FrameHook::pre_paint())
    }
}
