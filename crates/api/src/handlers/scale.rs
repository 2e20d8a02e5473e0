//! Handlers for the `/scales` resource.

use axum::extract::State;
use axum::Json;
use harmonia_core::error::CoreError;
use harmonia_db::models::key::{Key, KeyFilter};
use harmonia_db::models::scale::{Scale, ScaleFilter};
use harmonia_db::repositories::{KeyRepo, ScaleRepo};

use crate::error::{AppError, AppResult};
use crate::query::{FilterQuery, IdPath, PageQuery};
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

/// GET /api/v1/scales
pub async fn list(
    State(state): State<AppState>,
    FilterQuery(filter): FilterQuery<ScaleFilter>,
    PageQuery(pagination): PageQuery,
) -> AppResult<PageResponse<Scale>> {
    let page = ScaleRepo::list(&state.pool, &filter, pagination).await?;
    Ok(page.into())
}

/// GET /api/v1/scales/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<DataResponse<Scale>>> {
    let scale = ScaleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Scale",
            id,
        }))?;
    Ok(Json(DataResponse { data: scale }))
}

/// GET /api/v1/scales/{id}/keys
pub async fn list_keys(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    FilterQuery(filter): FilterQuery<KeyFilter>,
    PageQuery(pagination): PageQuery,
) -> AppResult<PageResponse<Key>> {
    let page = KeyRepo::list_of_scale(&state.pool, id, &filter, pagination).await?;
    Ok(page.into())
}
