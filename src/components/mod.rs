//! UI Components for DevBlog.

mod back_to_top;
mod blog_card;
mod credly_qr;
mod nav_header;
mod scroll;
mod skill_bar;

pub use back_to_top::BackToTop;
pub use blog_card::BlogCard;
pub use credly_qr::CredlyQr;
pub use nav_header::{NavHeader, NavLocation};
pub use scroll::{next_frame, show_page, use_reveal};
pub use skill_bar::{skill_bar_id, skill_item_id, SkillBar};
