//! Static metadata the admin console renders its dropdowns and badges from.

use axum::response::IntoResponse;
use axum::Json;
use mandir_core::badge::{FilterOption, Tone};
use mandir_core::content::{
    CardIcon, CardTemplate, EventStatus, EventType, InfoCardType, InfoIcon, Priority,
    ServiceCategory, ServiceStatus, Verse, SUGGESTED_VERSES,
};
use serde::Serialize;

use crate::response::DataResponse;

/// Option sets per list screen.
#[derive(Debug, Serialize)]
pub struct FilterCatalog {
    /// Event types followed by event statuses, as one dropdown.
    pub events: Vec<FilterOption>,
    pub services: Vec<FilterOption>,
    /// Info card types followed by active/inactive.
    pub info_cards: Vec<FilterOption>,
    /// Active/inactive filter used by the slider, service card and
    /// testimonial lists.
    pub visibility: Vec<FilterOption>,
    pub service_statuses: Vec<FilterOption>,
    pub event_priorities: Vec<FilterOption>,
    pub card_icons: &'static [CardIcon],
    pub info_icons: &'static [InfoIcon],
    /// Starting title, icon and keys for a new info card of each type.
    pub info_card_templates: &'static [CardTemplate],
    pub welcome_verses: &'static [Verse],
}

impl FilterCatalog {
    pub fn build() -> Self {
        let mut events = vec![FilterOption::all("All Events")];
        events.extend(FilterOption::from_badge::<EventType>());
        events.extend(FilterOption::from_badge::<EventStatus>());

        let mut services = vec![FilterOption::all("All Services")];
        services.extend(FilterOption::from_badge::<ServiceCategory>());

        let visibility = vec![
            FilterOption::all("All"),
            FilterOption {
                value: "active",
                label: "Active",
                tone: Some(Tone::Green),
            },
            FilterOption {
                value: "inactive",
                label: "Hidden",
                tone: Some(Tone::Gray),
            },
        ];

        let mut info_cards = vec![FilterOption::all("All Cards")];
        info_cards.extend(FilterOption::from_badge::<InfoCardType>());
        info_cards.extend(visibility[1..].iter().cloned());

        Self {
            events,
            services,
            info_cards,
            visibility,
            service_statuses: FilterOption::from_badge::<ServiceStatus>(),
            event_priorities: FilterOption::from_badge::<Priority>(),
            card_icons: CardIcon::ALL,
            info_icons: InfoIcon::ALL,
            info_card_templates: InfoCardType::TEMPLATES,
            welcome_verses: SUGGESTED_VERSES,
        }
    }
}

/// GET /api/v1/meta/filters
pub async fn get_filters() -> impl IntoResponse {
    Json(DataResponse {
        data: FilterCatalog::build(),
    })
}
