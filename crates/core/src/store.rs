use async_trait::async_trait;

use crate::errors::ClockResult;
use crate::models::binding::{ChannelBinding, NewBinding};

/// Access to the Channel Registry.
///
/// Every method is a single atomic storage operation. Implementations report
/// storage faults as [`crate::errors::ClockError::Database`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BindingStore: Send + Sync {
    /// Insert the binding, or fully replace the row with the same channel id.
    async fn upsert(&self, binding: NewBinding) -> ClockResult<ChannelBinding>;

    /// Delete the row. Removing an unknown channel is not an error.
    async fn remove(&self, channel_id: &str) -> ClockResult<()>;

    async fn all(&self) -> ClockResult<Vec<ChannelBinding>>;

    async fn by_guild(&self, guild_id: &str) -> ClockResult<Vec<ChannelBinding>>;

    async fn by_channel(&self, channel_id: &str) -> ClockResult<Option<ChannelBinding>>;
}
