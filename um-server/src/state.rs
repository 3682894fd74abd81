use sqlx::SqlitePool;

/// Shared application state.
///
/// The store pool is built once in `main` and injected into handlers via
/// axum's `State` extractor; it is the only object shared between requests.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}
