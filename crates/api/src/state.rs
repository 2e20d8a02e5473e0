/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally. Server
/// configuration is consumed when the router is built and is not carried
/// here.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: harmonia_db::DbPool,
}
