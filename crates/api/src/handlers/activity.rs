//! Recent content changes feed.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::query::ActivityParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Number of events returned when `limit` is omitted.
pub const DEFAULT_ACTIVITY_LIMIT: usize = 20;

/// GET /api/v1/activity?limit=
///
/// Most recent content events, newest first. `limit` is capped at the
/// configured log capacity.
pub async fn list_activity(
    State(state): State<AppState>,
    Query(params): Query<ActivityParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_ACTIVITY_LIMIT)
        .min(state.activity.capacity());
    let events = state.activity.recent(limit).await;

    Ok(Json(DataResponse { data: events }))
}
