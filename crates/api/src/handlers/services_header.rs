//! Handlers for the heading block above the service cards.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use mandir_core::content::UpdateServicesHeader;
use mandir_core::validation::validate_input;
use mandir_events::ContentEvent;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/services-header
pub async fn get_services_header(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let header = state.content.services_header.read().await.clone();

    Ok(Json(DataResponse { data: header }))
}

/// PUT /api/v1/services-header
///
/// Replace the header as a whole.
pub async fn update_services_header(
    State(state): State<AppState>,
    Json(input): Json<UpdateServicesHeader>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let mut header = state.content.services_header.write().await;
    header.replace(input, Utc::now());
    let updated = header.clone();
    drop(header);

    tracing::info!(main_title = %updated.main_title, "Services header updated");
    state.publish(ContentEvent::new("services_header.updated"));

    Ok(Json(DataResponse { data: updated }))
}
