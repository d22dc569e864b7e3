use crate::models::DbChannelBinding;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Sqlite};

/// Insert a binding or replace the existing row for `channel_id` entirely,
/// `created_at` included.
pub async fn upsert_channel_binding(
    pool: &Pool<Sqlite>,
    channel_id: &str,
    guild_id: &str,
    timezone: &str,
    created_by: Option<&str>,
) -> Result<DbChannelBinding> {
    let now = Utc::now();

    tracing::debug!(channel_id, guild_id, timezone, "Upserting channel binding");

    let binding = sqlx::query_as::<_, DbChannelBinding>(
        r#"
        INSERT OR REPLACE INTO time_channels (channel_id, guild_id, timezone, created_at, created_by)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING channel_id, guild_id, timezone, created_at, created_by
        "#,
    )
    .bind(channel_id)
    .bind(guild_id)
    .bind(timezone)
    .bind(now)
    .bind(created_by)
    .fetch_one(pool)
    .await?;

    Ok(binding)
}

pub async fn delete_channel_binding(pool: &Pool<Sqlite>, channel_id: &str) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM time_channels
        WHERE channel_id = ?1
        "#,
    )
    .bind(channel_id)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn get_all_channel_bindings(pool: &Pool<Sqlite>) -> Result<Vec<DbChannelBinding>> {
    let bindings = sqlx::query_as::<_, DbChannelBinding>(
        r#"
        SELECT channel_id, guild_id, timezone, created_at, created_by
        FROM time_channels
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(bindings)
}

pub async fn get_channel_bindings_by_guild(
    pool: &Pool<Sqlite>,
    guild_id: &str,
) -> Result<Vec<DbChannelBinding>> {
    let bindings = sqlx::query_as::<_, DbChannelBinding>(
        r#"
        SELECT channel_id, guild_id, timezone, created_at, created_by
        FROM time_channels
        WHERE guild_id = ?1
        ORDER BY created_at ASC
        "#,
    )
    .bind(guild_id)
    .fetch_all(pool)
    .await?;

    Ok(bindings)
}

pub async fn get_channel_binding(
    pool: &Pool<Sqlite>,
    channel_id: &str,
) -> Result<Option<DbChannelBinding>> {
    let binding = sqlx::query_as::<_, DbChannelBinding>(
        r#"
        SELECT channel_id, guild_id, timezone, created_at, created_by
        FROM time_channels
        WHERE channel_id = ?1
        "#,
    )
    .bind(channel_id)
    .fetch_optional(pool)
    .await?;

    Ok(binding)
}
