use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted association of one voice channel to one timezone key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelBinding {
    pub channel_id: String,
    pub guild_id: String,
    /// Catalog key. Not guaranteed to still exist in the catalog.
    pub timezone_key: String,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by a bind request. `created_at` is stamped by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBinding {
    pub channel_id: String,
    pub guild_id: String,
    pub timezone_key: String,
    pub created_by: Option<String>,
}
