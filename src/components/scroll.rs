//! Scroll, layout and frame hooks.
//!
//! The page reports scroll offsets, section geometry, element visibility
//! and animation frames through small scripts run with `document::eval`.
//! What to do with those reports is decided in `devblog_core`.

use std::time::Duration;

use devblog_core::{Section, Throttle};
use dioxus::prelude::*;
use tokio::time::Instant;

const SCROLL_LISTENER: &str = r#"
dioxus.send(window.scrollY);
window.addEventListener('scroll', () => dioxus.send(window.scrollY), { passive: true });
"#;

const SECTION_LAYOUT: &str = r#"
const measure = () => Array.from(document.querySelectorAll('section[id]')).map((s) => ({
    id: s.id,
    top: s.offsetTop,
    height: s.offsetHeight,
}));
dioxus.send(measure());
window.addEventListener('resize', () => dioxus.send(measure()));
"#;

const REVEAL_OBSERVER: &str = r#"
const observer = new IntersectionObserver((entries) => {
    entries.forEach((entry) => {
        if (entry.isIntersecting) {
            dioxus.send(entry.target.id);
            observer.unobserve(entry.target);
        }
    });
}, { threshold: __THRESHOLD__, rootMargin: '0px 0px -50px 0px' });
document.querySelectorAll('__SELECTOR__').forEach((el) => observer.observe(el));
"#;

const SHOW_BODY: &str = "document.body.style.opacity = '1';";

const ANIMATION_FRAME: &str = "requestAnimationFrame(() => dioxus.send(true));";

/// Run `handler` with the window scroll offset, at most once per `interval`.
///
/// Scroll events arriving inside the interval are dropped.
pub fn use_throttled_scroll(interval: Duration, mut handler: impl FnMut(f64) + 'static) {
    use_hook(move || {
        spawn(async move {
            let mut throttle = Throttle::new(interval);
            let mut scroll = document::eval(SCROLL_LISTENER);
            while let Ok(scroll_y) = scroll.recv::<f64>().await {
                throttle.call(Instant::now(), || handler(scroll_y));
            }
            tracing::debug!("Scroll listener closed");
        })
    });
}

/// Geometry of every `section[id]` on the page, re-measured on resize.
pub fn use_section_layout() -> Signal<Vec<Section>> {
    let mut sections = use_signal(Vec::new);

    use_effect(move || {
        spawn(async move {
            let mut layout = document::eval(SECTION_LAYOUT);
            while let Ok(measured) = layout.recv::<Vec<Section>>().await {
                sections.set(measured);
            }
        });
    });

    sections
}

/// Report the `id` of each element matching `selector` the first time
/// `threshold` of it scrolls into view.
pub fn use_reveal(selector: &'static str, threshold: f64, on_reveal: impl FnMut(String) + 'static) {
    let mut pending = Some(on_reveal);

    use_effect(move || {
        let Some(mut on_reveal) = pending.take() else {
            return;
        };
        let script = REVEAL_OBSERVER
            .replace("__THRESHOLD__", &threshold.to_string())
            .replace("__SELECTOR__", selector);
        spawn(async move {
            let mut observer = document::eval(&script);
            while let Ok(id) = observer.recv::<String>().await {
                on_reveal(id);
            }
        });
    });
}

/// Resolve right before the browser paints the next frame.
pub async fn next_frame() {
    let mut frame = document::eval(ANIMATION_FRAME);
    if let Err(e) = frame.recv::<bool>().await {
        tracing::debug!("Animation frame unavailable: {:?}", e);
    }
}

/// Fade the page in on the first frame after load.
pub async fn show_page() {
    next_frame().await;
    let _ = document::eval(SHOW_BODY);
}

/// Smoothly scroll the window to a vertical offset.
pub fn scroll_to(top: f64) {
    let _ = document::eval(&format!(
        "window.scrollTo({{ top: {}, behavior: 'smooth' }});",
        top
    ));
}
