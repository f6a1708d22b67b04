//! Page components for DevBlog.

mod blog;
mod home;
mod not_found;
mod post;

pub use blog::Blog;
pub use home::Home;
pub use not_found::NotFound;
pub use post::Post;
