pub mod health;

use axum::routing::{get, post};
use axum::Router;
use mandir_core::collection::{Activatable, Ordered};
use mandir_core::content::{
    InfoCard, ServiceCard, SliderImage, TempleEvent, TempleService, Testimonial,
};

use crate::handlers::{
    activity, content, dashboard, meta, services_header, session, temple_info_header, welcome,
};
use crate::state::{AppState, ContentKind};

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /slider                                  list, create
/// /slider/{id}                             get, update, delete
/// /slider/{id}/move                        move up/down (POST)
/// /slider/{id}/toggle-active               flip visibility (POST)
///
/// /service-cards                           list, create
/// /service-cards/{id}                      get, update, delete
/// /service-cards/{id}/move                 move up/down (POST)
/// /service-cards/{id}/toggle-active        flip visibility (POST)
///
/// /testimonials                            list, create
/// /testimonials/{id}                       get, update, delete
/// /testimonials/{id}/move                  move up/down (POST)
/// /testimonials/{id}/toggle-active         flip visibility (POST)
///
/// /info-cards                              list, create
/// /info-cards/{id}                         get, update, delete
/// /info-cards/{id}/move                    move up/down (POST)
/// /info-cards/{id}/toggle-active           flip visibility (POST)
///
/// /events                                  list, create
/// /events/{id}                             get, update, delete
///
/// /services                                list, create
/// /services/{id}                           get, update, delete
///
/// /services-header                         get, replace (PUT)
/// /temple-info-header                      get, replace (PUT)
/// /welcome-section                         get, replace (PUT)
///
/// /meta/filters                            filter options and badge tones
/// /dashboard/summary                       per-collection counts
/// /activity                                recent content events
///
/// /session/sign-out                        expire client session state (POST)
/// ```
///
/// List endpoints accept `?search=&filter=`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/slider", ordered_router::<SliderImage>())
        .nest("/service-cards", ordered_router::<ServiceCard>())
        .nest("/testimonials", ordered_router::<Testimonial>())
        .nest("/info-cards", ordered_router::<InfoCard>())
        .nest("/events", collection_router::<TempleEvent>())
        .nest("/services", collection_router::<TempleService>())
        .route(
            "/services-header",
            get(services_header::get_services_header).put(services_header::update_services_header),
        )
        .route(
            "/temple-info-header",
            get(temple_info_header::get_temple_info_header)
                .put(temple_info_header::update_temple_info_header),
        )
        .route(
            "/welcome-section",
            get(welcome::get_welcome_section).put(welcome::update_welcome_section),
        )
        .route("/meta/filters", get(meta::get_filters))
        .route("/dashboard/summary", get(dashboard::get_summary))
        .route("/activity", get(activity::list_activity))
        .route("/session/sign-out", post(session::sign_out))
}

/// CRUD routes for one collection.
fn collection_router<K: ContentKind>() -> Router<AppState> {
    Router::new()
        .route("/", get(content::list::<K>).post(content::create::<K>))
        .route(
            "/{id}",
            get(content::get::<K>)
                .put(content::update::<K>)
                .delete(content::delete::<K>),
        )
}

/// CRUD plus manual ordering and visibility toggling.
fn ordered_router<K: ContentKind + Ordered + Activatable>() -> Router<AppState> {
    collection_router::<K>()
        .route("/{id}/move", post(content::move_record::<K>))
        .route("/{id}/toggle-active", post(content::toggle_active::<K>))
}
