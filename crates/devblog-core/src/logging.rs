//! Logging setup shared by the DevBlog binaries.
//!
//! Console output through `tracing-subscriber`, filtered by `RUST_LOG` or an
//! explicit directive string.
//!
//! ```ignore
//! devblog_core::logging::init(Some("devblog=debug,devblog_core=debug"));
//! tracing::info!("ready");
//! ```

use std::time::Duration;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Directives used when neither `--log` nor `RUST_LOG` is set.
pub const DEFAULT_DIRECTIVES: &str = "info";

/// Build the filter from explicit directives, `RUST_LOG`, or the default.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    match directives {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES)),
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(directives: Option<&str>) {
    let subscriber = tracing_subscriber::registry()
        .with(env_filter(directives))
        .with(tracing_subscriber::fmt::layer().with_target(false));

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}

/// Route panics to the diagnostic log. No recovery is attempted.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown".to_string());
        tracing::error!(%location, "Runtime fault: {}", info);
    }));
}

/// Log how long the page took to come up.
pub fn report_page_load(elapsed: Duration) {
    tracing::info!("Page loaded in {}ms", elapsed.as_millis());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_directives_win() {
        let filter = env_filter(Some("devblog_core=trace"));
        assert_eq!(filter.to_string(), "devblog_core=trace");
    }

    #[test]
    fn init_twice_is_harmless() {
        init(Some("warn"));
        init(Some("warn"));
        report_page_load(Duration::from_millis(42));
    }
}
