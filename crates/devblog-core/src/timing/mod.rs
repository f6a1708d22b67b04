//! Time-deferral primitives for event handlers.
//!
//! All three are explicit stateful objects. Time is passed in by the caller
//! as a [`tokio::time::Instant`], so the Dioxus runtime and paused-clock
//! tests drive exactly the same code.
//!
//! - [`Throttle`]: at most one execution per interval, extra calls dropped
//! - [`Debouncer`]: release the latest value once input has been quiet
//! - [`FrameHook`]: defer a mutation until just before the next render pass

mod debounce;
mod frame;
mod throttle;

pub use debounce::Debouncer;
pub use frame::{FrameHook, FrameQueue};
pub use throttle::Throttle;
