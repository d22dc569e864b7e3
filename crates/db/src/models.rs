use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use voiceclock_core::models::binding::ChannelBinding;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbChannelBinding {
    pub channel_id: String,
    pub guild_id: String,
    pub timezone: String,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
}

impl From<DbChannelBinding> for ChannelBinding {
    fn from(row: DbChannelBinding) -> Self {
        Self {
            channel_id: row.channel_id,
            guild_id: row.guild_id,
            timezone_key: row.timezone,
            created_by: row.created_by,
            created_at: row.created_at,
        }
    }
}
