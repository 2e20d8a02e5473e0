use axum::routing::get;
use axum::Router;

use crate::handlers::chord_quality;
use crate::state::AppState;

/// Chord quality routes mounted at `/chord-qualities`.
///
/// ```text
/// GET /              -> list
/// GET /{id}          -> get_by_id
/// GET /{id}/chords   -> list_chords
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(chord_quality::list))
        .route("/{id}", get(chord_quality::get_by_id))
        .route("/{id}/chords", get(chord_quality::list_chords))
}
