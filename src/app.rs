use devblog_core::CardCollection;
use dioxus::prelude::*;

use crate::components::show_page;
use crate::pages::{Blog, Home, NotFound, Post};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Home page with about, skills and certificates sections
/// - `/blog` - Filterable, sortable, searchable post cards
/// - `/blog/:slug` - Post detail
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/blog")]
    Blog {},
    #[route("/blog/:slug")]
    Post { slug: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Forwards script errors from the page to the log.
const ERROR_LISTENER: &str = r#"
window.addEventListener('error', (e) => {
    dioxus.send(String(e.message || e.error || 'unknown error'));
});
"#;

/// Root application component.
///
/// Provides global styles, site config, the card collection and routing.
#[component]
pub fn App() -> Element {
    let site = crate::get_site();

    let config = site.config.clone();
    use_context_provider(|| config);

    let collection: Signal<CardCollection> =
        use_signal(|| CardCollection::from_raw(site.posts.clone(), &site.config));
    use_context_provider(|| collection);

    let skills = site.skills.clone();
    use_context_provider(|| skills);

    use_effect(move || {
        devblog_core::logging::report_page_load(crate::started_at().elapsed());
        spawn(show_page());

        spawn(async move {
            let mut errors = document::eval(ERROR_LISTENER);
            while let Ok(message) = errors.recv::<String>().await {
                tracing::error!("Page error: {}", message);
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
