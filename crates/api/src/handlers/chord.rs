//! Handlers for the `/chords` resource.

use axum::extract::State;
use axum::Json;
use harmonia_core::error::CoreError;
use harmonia_db::models::chord::{Chord, ChordDetail, ChordFilter};
use harmonia_db::models::key::{Key, KeyFilter};
use harmonia_db::models::pitch::{Pitch, PitchFilter};
use harmonia_db::repositories::{ChordRepo, KeyRepo, PitchRepo};

use crate::error::{AppError, AppResult};
use crate::query::{FilterQuery, IdPath, PageQuery};
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

/// GET /api/v1/chords
pub async fn list(
    State(state): State<AppState>,
    FilterQuery(filter): FilterQuery<ChordFilter>,
    PageQuery(pagination): PageQuery,
) -> AppResult<PageResponse<Chord>> {
    let page = ChordRepo::list(&state.pool, &filter, pagination).await?;
    Ok(page.into())
}

/// GET /api/v1/chords/{id}
///
/// Returns the chord with its quality, root and member pitches.
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<DataResponse<ChordDetail>>> {
    let chord = ChordRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Chord",
            id,
        }))?;
    Ok(Json(DataResponse { data: chord }))
}

/// GET /api/v1/chords/{id}/pitches
pub async fn list_pitches(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    FilterQuery(filter): FilterQuery<PitchFilter>,
    PageQuery(pagination): PageQuery,
) -> AppResult<PageResponse<Pitch>> {
    let page = PitchRepo::list_of_chord(&state.pool, id, &filter, pagination).await?;
    Ok(page.into())
}

/// GET /api/v1/chords/{id}/keys
pub async fn list_keys(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    FilterQuery(filter): FilterQuery<KeyFilter>,
    PageQuery(pagination): PageQuery,
) -> AppResult<PageResponse<Key>> {
    let page = KeyRepo::list_of_chord(&state.pool, id, &filter, pagination).await?;
    Ok(page.into())
}
