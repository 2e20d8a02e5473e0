use axum::routing::get;
use axum::Router;

use crate::handlers::key;
use crate::state::AppState;

/// Key routes mounted at `/keys`.
///
/// ```text
/// GET /               -> list
/// GET /{id}           -> get_by_id
/// GET /{id}/pitches   -> list_pitches
/// GET /{id}/chords    -> list_chords
/// GET /{id}/modes     -> list_modes (unpaginated)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(key::list))
        .route("/{id}", get(key::get_by_id))
        .route("/{id}/pitches", get(key::list_pitches))
        .route("/{id}/chords", get(key::list_chords))
        .route("/{id}/modes", get(key::list_modes))
}
