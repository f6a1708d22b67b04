//! Navigation Header Component
//!
//! Fixed navbar with brand, page links and the hamburger toggle used on
//! narrow screens. On the home page the links are in-page anchors and the
//! one for the section under the viewport is highlighted.

use devblog_core::{anchor_scroll_target, MobileMenu, NavbarStyle, SectionTracker};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::scroll::{scroll_to, use_section_layout, use_throttled_scroll};
use crate::context::use_site_config;

/// Page the header is rendered on.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    Blog,
    Post,
}

impl NavLocation {
    /// `(label, href)` pairs shown in the menu.
    ///
    /// Hrefs starting with `#` scroll within the page; the rest are routes.
    pub fn links(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            NavLocation::Home => &[
                ("Trang chủ", "#home"),
                ("Giới thiệu", "#about"),
                ("Kỹ năng", "#skills"),
                ("Chứng chỉ", "#certificates"),
                ("Blog", "/blog"),
            ],
            NavLocation::Blog | NavLocation::Post => &[("Trang chủ", "/"), ("Blog", "/blog")],
        }
    }

    /// Whether a route link points at this page.
    pub fn is_current(&self, href: &str) -> bool {
        matches!(
            (self, href),
            (NavLocation::Home, "/") | (NavLocation::Blog, "/blog")
        )
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current page
    pub current: NavLocation,
}

/// Navigation Header component
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let config = use_site_config();
    let navigator = use_navigator();
    let current = props.current;

    let menu = use_signal(MobileMenu::default);
    let mut style = use_signal(NavbarStyle::default);
    let mut tracker = use_signal(|| SectionTracker::new(Vec::new(), config.section_probe_offset));
    let sections = use_section_layout();

    // Keep the tracker's geometry in sync with the page layout
    use_effect(move || {
        let measured = sections();
        tracker.write().set_sections(measured);
    });

    let solid_after = config.navbar_solid_after;
    use_throttled_scroll(config.navbar_throttle(), move |scroll_y| {
        let next = NavbarStyle::for_scroll(scroll_y, solid_after);
        if *style.peek() != next {
            style.set(next);
        }
    });

    use_throttled_scroll(config.section_throttle(), move |scroll_y| {
        let mut next = tracker.peek().clone();
        next.update(scroll_y);
        if next != *tracker.peek() {
            tracker.set(next);
        }
    });

    let anchor_offset = config.anchor_offset;
    let open = menu().is_open();
    let menu_class = if open { "nav-menu active" } else { "nav-menu" };
    let hamburger_class = if open { "hamburger active" } else { "hamburger" };
    let navbar_css = style().css();
    let active_tracker = tracker();

    rsx! {
        nav { class: "navbar", style: "{navbar_css}",
            div { class: "container nav-container",
                span {
                    class: "nav-logo",
                    onclick: move |_| {
                        navigator.push(Route::Home {});
                    },
                    "DevBlog"
                }

                ul { class: "{menu_class}",
                    for (label, href) in current.links().iter().copied() {
                        li { class: "nav-item", key: "{href}",
                            a {
                                class: if active_tracker.is_active_link(href) || current.is_current(href) { "nav-link active" } else { "nav-link" },
                                href: "{href}",
                                onclick: move |e: MouseEvent| {
                                    e.prevent_default();
                                    follow_link(href, menu, tracker, anchor_offset, navigator);
                                },
                                "{label}"
                            }
                        }
                    }
                }

                button {
                    class: "{hamburger_class}",
                    "aria-label": "Menu",
                    onclick: move |_| toggle_menu(menu),
                    span { class: "bar" }
                    span { class: "bar" }
                    span { class: "bar" }
                }
            }
        }
    }
}

fn toggle_menu(mut menu: Signal<MobileMenu>) {
    menu.write().toggle();
}

fn follow_link(
    href: &'static str,
    mut menu: Signal<MobileMenu>,
    tracker: Signal<SectionTracker>,
    anchor_offset: f64,
    navigator: Navigator,
) {
    menu.write().close();

    if href.starts_with('#') {
        match anchor_scroll_target(href, tracker.peek().sections(), anchor_offset) {
            Some(top) => scroll_to(top),
            None => tracing::debug!(href, "Anchor target not on page"),
        }
    } else {
        navigator.push(href.to_string());
    }
}
