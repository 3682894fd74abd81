#![allow(dead_code)]

//! Test infrastructure for um-server API tests

use um_server::AppState;

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

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
    }
}

/// Create a test user directly through the gateway
pub async fn create_test_user(pool: &SqlitePool, name: &str, email: &str) -> um_core::User {
    let repo = um_db::UserRepository::new(pool.clone());
    repo.create(um_core::NewUser::new(
        name.to_string(),
        email.to_string(),
        "password".to_string(),
    ))
    .await
    .expect("Failed to create test user")
}
