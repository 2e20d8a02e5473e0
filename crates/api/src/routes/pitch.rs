use axum::routing::get;
use axum::Router;

use crate::handlers::pitch;
use crate::state::AppState;

/// Pitch routes mounted at `/pitches`.
///
/// ```text
/// GET /              -> list
/// GET /{id}          -> get_by_id
/// GET /{id}/chords   -> list_chords
/// GET /{id}/keys     -> list_keys
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pitch::list))
        .route("/{id}", get(pitch::get_by_id))
        .route("/{id}/chords", get(pitch::list_chords))
        .route("/{id}/keys", get(pitch::list_keys))
}
