//! Handlers for the home page welcome section.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use mandir_core::content::UpdateWelcomeSection;
use mandir_core::validation::validate_input;
use mandir_events::ContentEvent;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/welcome-section
pub async fn get_welcome_section(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let section = state.content.welcome.read().await.clone();

    Ok(Json(DataResponse { data: section }))
}

/// PUT /api/v1/welcome-section
///
/// Save the whole section; omitted text fields are cleared.
pub async fn update_welcome_section(
    State(state): State<AppState>,
    Json(input): Json<UpdateWelcomeSection>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let mut section = state.content.welcome.write().await;
    section.replace(input, Utc::now());
    let updated = section.clone();
    drop(section);

    tracing::info!(is_active = updated.is_active, "Welcome section updated");
    state.publish(ContentEvent::new("welcome_section.updated"));

    Ok(Json(DataResponse { data: updated }))
}
