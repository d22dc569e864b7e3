use sqlx::sqlite::SqlitePoolOptions;

use crate::DbPool;

/// In-memory database with the schema applied. A single connection is kept
/// open for the pool's lifetime so every query sees the same database.
pub async fn create_test_pool() -> DbPool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    crate::schema::initialize_database(&pool)
        .await
        .expect("Failed to initialize test database schema");

    pool
}
