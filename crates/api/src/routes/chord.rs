use axum::routing::get;
use axum::Router;

use crate::handlers::chord;
use crate::state::AppState;

/// Chord routes mounted at `/chords`.
///
/// ```text
/// GET /               -> list
/// GET /{id}           -> get_by_id
/// GET /{id}/pitches   -> list_pitches
/// GET /{id}/keys      -> list_keys
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(chord::list))
        .route("/{id}", get(chord::get_by_id))
        .route("/{id}/pitches", get(chord::list_pitches))
        .route("/{id}/keys", get(chord::list_keys))
}
