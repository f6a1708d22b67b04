//! Reusable blog toolbar controls.

mod filter_pills;
mod search_input;
mod sort_select;
mod view_toggle;

pub use filter_pills::*;
pub use search_input::*;
pub use sort_select::*;
pub use view_toggle::*;
