//! DevBlog UI Components
//!
//! Dioxus controls for the blog page toolbar. They are stateless: each one
//! renders the current selection and reports user input through an event
//! handler, leaving the view logic to `devblog_core::CardCollection`.
//!
//! ## Controls
//!
//! - **FilterPills**: category buttons, "all" first
//! - **SearchInput**: free-text search box
//! - **SortSelect**: newest / oldest / shortest / longest
//! - **ViewToggle**: grid or list layout

pub mod components;

pub use components::*;
