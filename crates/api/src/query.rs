//! Shared query parameter types for API handlers.
//!
//! List filters (`?search=&filter=`) use [`mandir_core::filter::ListFilter`]
//! directly.

use serde::Deserialize;

/// `?limit=` for the activity feed.
#[derive(Debug, Default, Deserialize)]
pub struct ActivityParams {
    pub limit: Option<usize>,
}
