//! Generic handlers shared by every content collection.
//!
//! Each handler is instantiated per record type through [`ContentKind`],
//! e.g. `list::<SliderImage>`. A store-level miss (`None`) becomes a 404.
//! Successful mutations are logged and published on the event bus.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mandir_core::collection::{Activatable, Direction, MoveOutcome, Ordered};
use mandir_core::filter::ListFilter;
use mandir_core::types::DbId;
use mandir_events::{ContentAction, ContentEvent};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, ListResponse};
use crate::state::{AppState, ContentKind};

/// Request body for `POST /{collection}/{id}/move`.
#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub direction: Direction,
}

/// Response for a move: the whole collection in its new order.
#[derive(Debug, Serialize)]
pub struct MoveResponse<T: Serialize> {
    pub data: Vec<T>,
    /// `false` when the record was already at the edge.
    pub moved: bool,
}

/// GET /api/v1/{collection}?search=&filter=
///
/// Records matching the search term and category/status filter, in
/// collection order.
pub async fn list<K: ContentKind>(
    State(state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> AppResult<impl IntoResponse> {
    let collection = K::collection(&state.content).read().await;
    let data: Vec<K> = collection.filter(&filter).into_iter().cloned().collect();
    let total = collection.len();

    Ok(Json(ListResponse { data, total }))
}

/// POST /api/v1/{collection}
pub async fn create<K: ContentKind>(
    State(state): State<AppState>,
    Json(input): Json<K::Create>,
) -> AppResult<impl IntoResponse> {
    let mut collection = K::collection(&state.content).write().await;
    let created = collection.create(input)?.clone();
    drop(collection);

    tracing::info!(entity = K::ENTITY, id = created.id(), "Content record created");
    state.publish(ContentEvent::record(
        K::ENTITY,
        ContentAction::Created,
        created.id(),
    ));

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/{collection}/{id}
pub async fn get<K: ContentKind>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let record = K::collection(&state.content)
        .read()
        .await
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::not_found(K::ENTITY, id))?;

    Ok(Json(DataResponse { data: record }))
}

/// PUT /api/v1/{collection}/{id}
///
/// Merge the provided fields into the record.
pub async fn update<K: ContentKind>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<K::Update>,
) -> AppResult<impl IntoResponse> {
    let mut collection = K::collection(&state.content).write().await;
    let updated = collection
        .update(id, input)?
        .cloned()
        .ok_or_else(|| AppError::not_found(K::ENTITY, id))?;
    drop(collection);

    tracing::info!(entity = K::ENTITY, id, "Content record updated");
    state.publish(ContentEvent::record(K::ENTITY, ContentAction::Updated, id));

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/{collection}/{id}
///
/// The client confirms with the admin before calling this.
pub async fn delete<K: ContentKind>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = K::collection(&state.content).write().await.delete(id);

    if removed.is_none() {
        return Err(AppError::not_found(K::ENTITY, id));
    }

    tracing::info!(entity = K::ENTITY, id, "Content record deleted");
    state.publish(ContentEvent::record(K::ENTITY, ContentAction::Deleted, id));

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/{collection}/{id}/move
///
/// Swap the record with its neighbour. Moving past either end is a no-op
/// reported as `moved: false`.
pub async fn move_record<K: ContentKind + Ordered>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MoveRequest>,
) -> AppResult<impl IntoResponse> {
    let mut collection = K::collection(&state.content).write().await;
    let outcome = collection.reorder(id, input.direction);
    let data = collection.list().to_vec();
    drop(collection);

    let moved = match outcome {
        MoveOutcome::NotFound => return Err(AppError::not_found(K::ENTITY, id)),
        MoveOutcome::AtBoundary => false,
        MoveOutcome::Moved { from, to } => {
            tracing::info!(entity = K::ENTITY, id, from, to, "Content record reordered");
            state.publish(
                ContentEvent::record(K::ENTITY, ContentAction::Reordered, id).with_payload(
                    serde_json::json!({ "direction": input.direction, "from": from + 1, "to": to + 1 }),
                ),
            );
            true
        }
    };

    Ok(Json(MoveResponse { data, moved }))
}

/// POST /api/v1/{collection}/{id}/toggle-active
pub async fn toggle_active<K: ContentKind + Activatable>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let record = K::collection(&state.content)
        .write()
        .await
        .toggle_active(id)
        .cloned()
        .ok_or_else(|| AppError::not_found(K::ENTITY, id))?;

    let is_active = record.is_active();
    tracing::info!(entity = K::ENTITY, id, is_active, "Content record toggled");
    state.publish(
        ContentEvent::record(K::ENTITY, ContentAction::Toggled, id)
            .with_payload(serde_json::json!({ "is_active": is_active })),
    );

    Ok(Json(DataResponse { data: record }))
}
