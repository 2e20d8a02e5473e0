//! Handlers for the `/chord-qualities` resource.

use axum::extract::State;
use axum::Json;
use harmonia_core::error::CoreError;
use harmonia_db::models::chord::{Chord, ChordFilter};
use harmonia_db::models::chord_quality::{ChordQuality, ChordQualityFilter};
use harmonia_db::repositories::{ChordQualityRepo, ChordRepo};

use crate::error::{AppError, AppResult};
use crate::query::{FilterQuery, IdPath, PageQuery};
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

/// GET /api/v1/chord-qualities
pub async fn list(
    State(state): State<AppState>,
    FilterQuery(filter): FilterQuery<ChordQualityFilter>,
    PageQuery(pagination): PageQuery,
) -> AppResult<PageResponse<ChordQuality>> {
    let page = ChordQualityRepo::list(&state.pool, &filter, pagination).await?;
    Ok(page.into())
}

/// GET /api/v1/chord-qualities/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<DataResponse<ChordQuality>>> {
    let quality = ChordQualityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ChordQuality",
            id,
        }))?;
    Ok(Json(DataResponse { data: quality }))
}

/// GET /api/v1/chord-qualities/{id}/chords
pub async fn list_chords(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    FilterQuery(filter): FilterQuery<ChordFilter>,
    PageQuery(pagination): PageQuery,
) -> AppResult<PageResponse<Chord>> {
    let page = ChordRepo::list_of_quality(&state.pool, id, &filter, pagination).await?;
    Ok(page.into())
}
