use eyre::Result;
use sqlx::{Pool, Sqlite};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Sqlite>) -> Result<()> {
    info!("Initializing database schema...");

    // `timezone` holds a catalog key; keys are not checked here.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS time_channels (
            channel_id TEXT PRIMARY KEY,
            guild_id TEXT NOT NULL,
            timezone TEXT NOT NULL,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            created_by TEXT
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_time_channels_guild_id ON time_channels(guild_id);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
