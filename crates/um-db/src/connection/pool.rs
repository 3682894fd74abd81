//! Store connection setup.
//!
//! The pool handle returned here is the gateway connection for the whole
//! process. It is built once at startup and injected into request handlers;
//! nothing in this crate holds global connection state.

use crate::Result;

use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

const MAX_CONNECTIONS: u32 = 10;
const BUSY_TIMEOUT_SECS: u64 = 5;

/// Open (creating if missing) the store file and return a connection pool.
pub async fn connect(database_path: &Path) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(BUSY_TIMEOUT_SECS)),
        )
        .await?;

    Ok(pool)
}

/// In-memory store, used by the test suites.
pub async fn connect_in_memory() -> Result<SqlitePool> {
    let pool = SqlitePool::connect(":memory:").await?;
    Ok(pool)
}

/// Apply the embedded schema migrations to the given pool.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
