//! Mandir content core: record types and the in-memory collection store.
//!
//! No I/O lives here; the API crate wraps these types in HTTP handlers and
//! the events crate carries change notifications.

pub mod badge;
pub mod collection;
pub mod content;
pub mod error;
pub mod filter;
pub mod session;
pub mod types;
pub mod validation;
