use async_trait::async_trait;
use voiceclock_core::errors::ClockResult;
use voiceclock_core::models::binding::{ChannelBinding, NewBinding};
use voiceclock_core::store::BindingStore;

use crate::DbPool;
use crate::repositories::channel_binding;

/// Channel Registry backed by the `time_channels` table.
#[derive(Debug, Clone)]
pub struct SqliteBindingStore {
    pool: DbPool,
}

impl SqliteBindingStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl BindingStore for SqliteBindingStore {
    async fn upsert(&self, binding: NewBinding) -> ClockResult<ChannelBinding> {
        let row = channel_binding::upsert_channel_binding(
            &self.pool,
            &binding.channel_id,
            &binding.guild_id,
            &binding.timezone_key,
            binding.created_by.as_deref(),
        )
        .await?;

        Ok(row.into())
    }

    async fn remove(&self, channel_id: &str) -> ClockResult<()> {
        channel_binding::delete_channel_binding(&self.pool, channel_id).await?;
        Ok(())
    }

    async fn all(&self) -> ClockResult<Vec<ChannelBinding>> {
        let rows = channel_binding::get_all_channel_bindings(&self.pool).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn by_guild(&self, guild_id: &str) -> ClockResult<Vec<ChannelBinding>> {
        let rows = channel_binding::get_channel_bindings_by_guild(&self.pool, guild_id).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn by_channel(&self, channel_id: &str) -> ClockResult<Option<ChannelBinding>> {
        let row = channel_binding::get_channel_binding(&self.pool, channel_id).await?;
        Ok(row.map(Into::into))
    }
}
