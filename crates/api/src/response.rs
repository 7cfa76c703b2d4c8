//! Response envelope types for API handlers.
//!
//! All responses use a `{ "data": ... }` envelope. List endpoints add the
//! unfiltered collection size so clients can show "Showing X of Y".

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "data": [...], "total": N }` for filtered list endpoints.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub data: Vec<T>,
    /// Collection size before filtering.
    pub total: usize,
}
