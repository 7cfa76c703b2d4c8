//! Admin dashboard counters.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use mandir_core::content::{EventStatus, ServiceStatus};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Total and "live" count for one collection.
#[derive(Debug, Serialize)]
pub struct Tally {
    pub total: usize,
    /// Active records; for events, the upcoming ones.
    pub live: usize,
}

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub slider_images: Tally,
    pub events: Tally,
    pub services: Tally,
    pub service_cards: Tally,
    pub testimonials: Tally,
    pub info_cards: Tally,
}

/// GET /api/v1/dashboard/summary
pub async fn get_summary(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let content = &state.content;

    let slider_images = {
        let c = content.slider.read().await;
        Tally { total: c.len(), live: c.active_count() }
    };
    let events = {
        let c = content.events.read().await;
        let upcoming = c.list().iter().filter(|e| e.status == EventStatus::Upcoming).count();
        Tally { total: c.len(), live: upcoming }
    };
    let services = {
        let c = content.services.read().await;
        let active = c.list().iter().filter(|s| s.status == ServiceStatus::Active).count();
        Tally { total: c.len(), live: active }
    };
    let service_cards = {
        let c = content.service_cards.read().await;
        Tally { total: c.len(), live: c.active_count() }
    };
    let testimonials = {
        let c = content.testimonials.read().await;
        Tally { total: c.len(), live: c.active_count() }
    };
    let info_cards = {
        let c = content.info_cards.read().await;
        Tally { total: c.len(), live: c.active_count() }
    };

    Ok(Json(DataResponse {
        data: DashboardSummary {
            slider_images,
            events,
            services,
            service_cards,
            testimonials,
            info_cards,
        },
    }))
}
