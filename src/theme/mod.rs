//! Visual theme for DevBlog.

mod styles;

pub use styles::GLOBAL_STYLES;
