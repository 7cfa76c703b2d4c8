//! Handlers for the heading block above the visitor information cards.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use mandir_core::content::UpdateTempleInfoHeader;
use mandir_core::validation::validate_input;
use mandir_events::ContentEvent;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/temple-info-header
pub async fn get_temple_info_header(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let header = state.content.temple_info_header.read().await.clone();

    Ok(Json(DataResponse { data: header }))
}

/// PUT /api/v1/temple-info-header
pub async fn update_temple_info_header(
    State(state): State<AppState>,
    Json(input): Json<UpdateTempleInfoHeader>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let mut header = state.content.temple_info_header.write().await;
    header.replace(input, Utc::now());
    let updated = header.clone();
    drop(header);

    tracing::info!(section_title = %updated.section_title, "Temple info header updated");
    state.publish(ContentEvent::new("temple_info_header.updated"));

    Ok(Json(DataResponse { data: updated }))
}
