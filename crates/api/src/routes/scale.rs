use axum::routing::get;
use axum::Router;

use crate::handlers::scale;
use crate::state::AppState;

/// Scale routes mounted at `/scales`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(scale::list))
        .route("/{id}", get(scale::get_by_id))
        .route("/{id}/keys", get(scale::list_keys))
}
