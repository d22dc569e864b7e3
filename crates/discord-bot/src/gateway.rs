//! [`ChannelGateway`] backed by the Discord REST API.

use std::sync::Arc;

use serenity::all::{Channel, ChannelId, ChannelType, EditChannel};
use serenity::http::{Http, HttpError};
use voiceclock_core::errors::GatewayError;
use voiceclock_core::gateway::{ChannelGateway, ChannelKind, LiveChannel};

/// Discord JSON error codes the reconciliation engine reacts to.
pub const UNKNOWN_CHANNEL: isize = 10003;
pub const MISSING_ACCESS: isize = 50001;
pub const MISSING_PERMISSIONS: isize = 50013;

pub struct SerenityGateway {
    http: Arc<Http>,
}

impl SerenityGateway {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait::async_trait]
impl ChannelGateway for SerenityGateway {
    async fn resolve(&self, channel_id: &str) -> Result<LiveChannel, GatewayError> {
        let id = parse_channel_id(channel_id)?;
        let channel = id.to_channel(&*self.http).await.map_err(classify_error)?;

        let live = match channel {
            Channel::Guild(guild_channel) => LiveChannel {
                id: channel_id.to_string(),
                kind: if guild_channel.kind == ChannelType::Voice {
                    ChannelKind::Voice
                } else {
                    ChannelKind::Other
                },
                name: guild_channel.name,
            },
            _ => LiveChannel {
                id: channel_id.to_string(),
                name: String::new(),
                kind: ChannelKind::Other,
            },
        };

        Ok(live)
    }

    async fn rename(&self, channel_id: &str, name: &str) -> Result<(), GatewayError> {
        let id = parse_channel_id(channel_id)?;
        id.edit(&*self.http, EditChannel::new().name(name))
            .await
            .map_err(classify_error)?;
        Ok(())
    }
}

/// A stored id that cannot name a Discord channel is treated as a channel
/// that no longer exists, so the row gets pruned.
pub fn parse_channel_id(channel_id: &str) -> Result<ChannelId, GatewayError> {
    match channel_id.trim().parse::<u64>() {
        Ok(id) if id != 0 => Ok(ChannelId::new(id)),
        _ => Err(GatewayError::NotFound),
    }
}

pub fn classify_code(code: isize) -> Option<GatewayError> {
    match code {
        UNKNOWN_CHANNEL => Some(GatewayError::NotFound),
        MISSING_PERMISSIONS => Some(GatewayError::PermissionDenied),
        MISSING_ACCESS => Some(GatewayError::AccessRevoked),
        _ => None,
    }
}

fn classify_error(e: serenity::Error) -> GatewayError {
    if let serenity::Error::Http(http_error) = &e {
        let http_error: &HttpError = http_error;
        if let HttpError::UnsuccessfulRequest(response) = http_error {
            if let Some(classified) = classify_code(response.error.code) {
                return classified;
            }
        }
    }

    GatewayError::Other(e.to_string())
}
