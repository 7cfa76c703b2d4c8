//! Content change notifications.
//!
//! - [`EventBus`]: in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`ContentEvent`]: the envelope published after every successful
//!   mutation of a content collection.
//! - [`ActivityLog`]: background subscriber keeping the most recent events
//!   for the admin dashboard.

pub mod activity;
pub mod bus;

pub use activity::ActivityLog;
pub use bus::{ContentAction, ContentEvent, EventBus};
