#![allow(dead_code)]

mod fixtures;

pub use fixtures::*;

use sqlx::SqlitePool;

/// Create a test pool with an in-memory store and the schema applied
pub async fn create_test_pool() -> SqlitePool {
    let pool = um_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    um_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}
