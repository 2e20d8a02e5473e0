pub mod chord;
pub mod chord_quality;
pub mod health;
pub mod key;
pub mod pitch;
pub mod scale;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Every route is read-only (`GET`). List routes accept the entity's filter
/// keys plus `page` / `per_page`; `/keys/{id}/modes` accepts the key filter
/// keys only.
///
/// ```text
/// /pitches                         list
/// /pitches/{id}                    get
/// /pitches/{id}/chords             chords containing the pitch
/// /pitches/{id}/keys               keys containing the pitch
///
/// /chord-qualities                 list
/// /chord-qualities/{id}            get
/// /chord-qualities/{id}/chords     chords of the quality
///
/// /chords                          list
/// /chords/{id}                     get (with member pitches)
/// /chords/{id}/pitches             member pitches
/// /chords/{id}/keys                keys the chord is playable in
///
/// /scales                          list
/// /scales/{id}                     get
/// /scales/{id}/keys                keys built on the scale
///
/// /keys                            list
/// /keys/{id}                       get (with member pitches)
/// /keys/{id}/pitches               member pitches
/// /keys/{id}/chords                playable chords
/// /keys/{id}/modes                 keys sharing the rotation class
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/pitches", pitch::router())
        .nest("/chord-qualities", chord_quality::router())
        .nest("/chords", chord::router())
        .nest("/scales", scale::router())
        .nest("/keys", key::router())
}
