//! Handlers for the `/pitches` resource.

use axum::extract::State;
use axum::Json;
use harmonia_core::error::CoreError;
use harmonia_db::models::chord::{Chord, ChordFilter};
use harmonia_db::models::key::{Key, KeyFilter};
use harmonia_db::models::pitch::{Pitch, PitchFilter};
use harmonia_db::repositories::{ChordRepo, KeyRepo, PitchRepo};

use crate::error::{AppError, AppResult};
use crate::query::{FilterQuery, IdPath, PageQuery};
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

/// GET /api/v1/pitches
pub async fn list(
    State(state): State<AppState>,
    FilterQuery(filter): FilterQuery<PitchFilter>,
    PageQuery(pagination): PageQuery,
) -> AppResult<PageResponse<Pitch>> {
    let page = PitchRepo::list(&state.pool, &filter, pagination).await?;
    Ok(page.into())
}

/// GET /api/v1/pitches/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<DataResponse<Pitch>>> {
    let pitch = PitchRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Pitch",
            id,
        }))?;
    Ok(Json(DataResponse { data: pitch }))
}

/// GET /api/v1/pitches/{id}/chords
pub async fn list_chords(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    FilterQuery(filter): FilterQuery<ChordFilter>,
    PageQuery(pagination): PageQuery,
) -> AppResult<PageResponse<Chord>> {
    let page = ChordRepo::list_of_pitch(&state.pool, id, &filter, pagination).await?;
    Ok(page.into())
}

/// GET /api/v1/pitches/{id}/keys
pub async fn list_keys(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    FilterQuery(filter): FilterQuery<KeyFilter>,
    PageQuery(pagination): PageQuery,
) -> AppResult<PageResponse<Key>> {
    let page = KeyRepo::list_of_pitch(&state.pool, id, &filter, pagination).await?;
    Ok(page.into())
}
