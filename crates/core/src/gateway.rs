use async_trait::async_trait;

use crate::errors::GatewayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Voice,
    Other,
}

/// Snapshot of a channel as the platform currently reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveChannel {
    pub id: String,
    pub name: String,
    pub kind: ChannelKind,
}

/// Channel lookup and rename capabilities of the chat platform.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChannelGateway: Send + Sync {
    /// Fetch the channel. A deleted channel must yield [`GatewayError::NotFound`].
    async fn resolve(&self, channel_id: &str) -> Result<LiveChannel, GatewayError>;

    async fn rename(&self, channel_id: &str, name: &str) -> Result<(), GatewayError>;
}
