//! Handlers for the `/keys` resource.

use axum::extract::State;
use axum::Json;
use harmonia_core::error::CoreError;
use harmonia_db::models::chord::{Chord, ChordFilter};
use harmonia_db::models::key::{Key, KeyDetail, KeyFilter};
use harmonia_db::models::pitch::{Pitch, PitchFilter};
use harmonia_db::repositories::{ChordRepo, KeyRepo, PitchRepo};

use crate::error::{AppError, AppResult};
use crate::query::{FilterQuery, IdPath, PageQuery};
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

/// GET /api/v1/keys
pub async fn list(
    State(state): State<AppState>,
    FilterQuery(filter): FilterQuery<KeyFilter>,
    PageQuery(pagination): PageQuery,
) -> AppResult<PageResponse<Key>> {
    let page = KeyRepo::list(&state.pool, &filter, pagination).await?;
    Ok(page.into())
}

/// GET /api/v1/keys/{id}
///
/// Returns the key with its tonic and member pitches.
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<DataResponse<KeyDetail>>> {
    let key = KeyRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Key", id }))?;
    Ok(Json(DataResponse { data: key }))
}

/// GET /api/v1/keys/{id}/pitches
pub async fn list_pitches(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    FilterQuery(filter): FilterQuery<PitchFilter>,
    PageQuery(pagination): PageQuery,
) -> AppResult<PageResponse<Pitch>> {
    let page = PitchRepo::list_of_key(&state.pool, id, &filter, pagination).await?;
    Ok(page.into())
}

/// GET /api/v1/keys/{id}/chords
pub async fn list_chords(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    FilterQuery(filter): FilterQuery<ChordFilter>,
    PageQuery(pagination): PageQuery,
) -> AppResult<PageResponse<Chord>> {
    let page = ChordRepo::list_of_key(&state.pool, id, &filter, pagination).await?;
    Ok(page.into())
}

/// GET /api/v1/keys/{id}/modes
///
/// Every key sharing this key's rotation class, unpaginated.
pub async fn list_modes(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    FilterQuery(filter): FilterQuery<KeyFilter>,
) -> AppResult<Json<DataResponse<Vec<Key>>>> {
    let modes = KeyRepo::list_modes(&state.pool, id, &filter).await?;
    Ok(Json(DataResponse { data: modes }))
}
