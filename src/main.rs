#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use devblog_core::content::{default_posts, default_skills, load_posts};
use devblog_core::{RawCard, SiteConfig, Skill};

/// Everything the pages render, loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pub config: SiteConfig,
    pub posts: Vec<RawCard>,
    pub skills: Vec<Skill>,
}

/// Global site content, set from command line
static SITE: OnceLock<SiteContent> = OnceLock::new();

/// Process start, for the page load report
static STARTED: OnceLock<Instant> = OnceLock::new();

/// Get the site content (loaded at startup or built-in)
pub fn get_site() -> SiteContent {
    SITE.get().cloned().unwrap_or_else(|| SiteContent {
        config: SiteConfig::default(),
        posts: default_posts(),
        skills: default_skills(),
    })
}

/// Time since the process started
pub fn started_at() -> Instant {
    *STARTED.get_or_init(Instant::now)
}

/// DevBlog - personal developer site
#[derive(Parser, Debug)]
#[command(name = "devblog-desktop")]
#[command(about = "DevBlog - personal developer site with a filterable blog")]
struct Args {
    /// JSON file with the blog posts (array of cards)
    #[arg(short, long)]
    posts: Option<PathBuf>,

    /// JSON site configuration (defaults to <config dir>/devblog/site.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter directives, e.g. "devblog=debug" (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

/// Default location of the site configuration
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("devblog").join("site.json"))
}

fn load_config(explicit: Option<&Path>) -> anyhow::Result<SiteConfig> {
    if let Some(path) = explicit {
        tracing::info!("Using config {:?}", path);
        return SiteConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()));
    }
    match default_config_path() {
        Some(path) if path.exists() => {
            tracing::info!("Using config {:?}", path);
            SiteConfig::load(&path)
                .with_context(|| format!("failed to load config {}", path.display()))
        }
        _ => {
            tracing::info!("Using built-in config");
            Ok(SiteConfig::default())
        }
    }
}

fn load_site(args: &Args) -> anyhow::Result<SiteContent> {
    let config = load_config(args.config.as_deref())?;
    let posts = match &args.posts {
        Some(path) => load_posts(path)
            .with_context(|| format!("failed to load posts {}", path.display()))?,
        None => default_posts(),
    };
    Ok(SiteContent {
        config,
        posts,
        skills: default_skills(),
    })
}

fn main() {
    started_at();
    let args = Args::parse();

    devblog_core::logging::init(args.log.as_deref());
    devblog_core::logging::install_panic_hook();

    let site = match load_site(&args) {
        Ok(site) => site,
        Err(e) => {
            tracing::error!("{:#}; falling back to built-in content", e);
            get_site()
        }
    };
    tracing::info!("Starting DevBlog with {} posts", site.posts.len());

    if cfg!(debug_assertions) {
        tracing::info!("DevBlog development build");
    }

    // Store site content globally
    let _ = SITE.set(site);

    launch();
}

#[cfg(feature = "desktop")]
fn launch() {
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("DevBlog")
            .with_inner_size(LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(all(feature = "web", not(feature = "desktop")))]
fn launch() {
    dioxus::LaunchBuilder::web().launch(app::App);
}

#[cfg(not(any(feature = "desktop", feature = "web")))]
fn launch() {
    tracing::error!("Built without a renderer; enable the `desktop` or `web` feature");
}
