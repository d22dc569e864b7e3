//! Slash-command declarations and their typed form.
//!
//! [`register_commands`] builds what gets published to Discord. Incoming
//! interactions are parsed into a [`BotCommand`], one variant per command
//! carrying its typed arguments, so dispatch is an exhaustive `match`.

use std::collections::HashMap;

use serenity::all::{ChannelId, CreateCommand, ResolvedOption, ResolvedValue};
use voiceclock_core::errors::{ClockError, ClockResult};

use crate::presence::{Activity, ActivityKind, PresenceStatus};

pub mod bot;
pub mod time;

pub const OPT_TIMEZONE: &str = "timezone";
pub const OPT_CHANNEL: &str = "channel";
pub const OPT_NAME: &str = "name";
pub const OPT_URL: &str = "url";
pub const OPT_IMAGE: &str = "image";
pub const OPT_TYPE: &str = "type";
pub const OPT_DESCRIPTION: &str = "description";
pub const OPT_STATUS: &str = "status";

pub const MIN_BOT_NAME_LEN: usize = 2;
pub const MAX_BOT_NAME_LEN: usize = 32;

/// Build every command the bot publishes.
pub fn register_commands() -> Vec<CreateCommand> {
    vec![
        time::bind_time_command(),
        time::unbind_time_command(),
        time::list_time_command(),
        time::force_sync_command(),
        bot::bot_rename_command(),
        bot::bot_avatar_command(),
        bot::bot_presence_command(),
        bot::bot_status_command(),
    ]
}

/// A channel picked in a command option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRef {
    pub id: ChannelId,
    pub name: Option<String>,
}

impl ChannelRef {
    pub fn mention(&self) -> String {
        format!("<#{}>", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Str(String),
    Channel(ChannelRef),
    Attachment { url: String },
}

/// Option values of one invocation, keyed by option name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs(HashMap<String, ArgValue>);

impl CommandArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the option types the bot's commands use. Other kinds are dropped.
    pub fn from_resolved(options: &[ResolvedOption<'_>]) -> Self {
        let mut args = Self::new();
        for option in options {
            let value = match &option.value {
                ResolvedValue::String(s) => ArgValue::Str((*s).to_string()),
                ResolvedValue::Channel(channel) => ArgValue::Channel(ChannelRef {
                    id: channel.id,
                    name: channel.name.clone(),
                }),
                ResolvedValue::Attachment(attachment) => ArgValue::Attachment {
                    url: attachment.url.clone(),
                },
                _ => continue,
            };
            args.0.insert(option.name.to_string(), value);
        }
        args
    }

    pub fn with(mut self, name: &str, value: ArgValue) -> Self {
        self.0.insert(name.to_string(), value);
        self
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        match self.0.get(name) {
            Some(ArgValue::Str(s)) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    fn require_string(&self, name: &str) -> ClockResult<&str> {
        self.string(name)
            .ok_or_else(|| ClockError::Validation(format!("Missing option: {name}")))
    }

    fn channel(&self, name: &str) -> ClockResult<ChannelRef> {
        match self.0.get(name) {
            Some(ArgValue::Channel(channel)) => Ok(channel.clone()),
            _ => Err(ClockError::Validation(format!("Missing option: {name}"))),
        }
    }

    fn attachment_url(&self, name: &str) -> Option<&str> {
        match self.0.get(name) {
            Some(ArgValue::Attachment { url }) => Some(url.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    BindTime { timezone: String, channel: ChannelRef },
    UnbindTime { channel: ChannelRef },
    ListTime,
    ForceSync,
    BotRename { name: String },
    BotAvatar { url: String },
    BotPresence { activity: Activity },
    BotStatus { status: PresenceStatus },
}

impl BotCommand {
    pub fn parse(name: &str, args: &CommandArgs) -> ClockResult<Self> {
        let command = match name {
            "bind-time" => BotCommand::BindTime {
                timezone: args.require_string(OPT_TIMEZONE)?.trim().to_string(),
                channel: args.channel(OPT_CHANNEL)?,
            },
            "unbind-time" => BotCommand::UnbindTime {
                channel: args.channel(OPT_CHANNEL)?,
            },
            "list-time" => BotCommand::ListTime,
            "force-sync" => BotCommand::ForceSync,
            "bot-rename" => {
                let name = args.require_string(OPT_NAME)?.trim().to_string();
                let len = name.chars().count();
                if !(MIN_BOT_NAME_LEN..=MAX_BOT_NAME_LEN).contains(&len) {
                    return Err(ClockError::Validation(format!(
                        "The bot name must be between {MIN_BOT_NAME_LEN} and {MAX_BOT_NAME_LEN} characters"
                    )));
                }
                BotCommand::BotRename { name }
            }
            "bot-avatar" => {
                // An uploaded image wins over a URL.
                let url = args
                    .attachment_url(OPT_IMAGE)
                    .or_else(|| args.string(OPT_URL))
                    .ok_or_else(|| {
                        ClockError::Validation(
                            "Provide an image URL or upload an image".to_string(),
                        )
                    })?;
                BotCommand::BotAvatar {
                    url: url.trim().to_string(),
                }
            }
            "bot-presence" => {
                let kind: ActivityKind = args.require_string(OPT_TYPE)?.parse()?;
                let activity = Activity::new(
                    kind,
                    args.require_string(OPT_DESCRIPTION)?,
                    args.string(OPT_URL).map(str::to_string),
                )?;
                BotCommand::BotPresence { activity }
            }
            "bot-status" => BotCommand::BotStatus {
                status: args.require_string(OPT_STATUS)?.parse()?,
            },
            other => {
                return Err(ClockError::Validation(format!("Unknown command: {other}")));
            }
        };

        Ok(command)
    }

    pub fn name(&self) -> &'static str {
        match self {
            BotCommand::BindTime { .. } => "bind-time",
            BotCommand::UnbindTime { .. } => "unbind-time",
            BotCommand::ListTime => "list-time",
            BotCommand::ForceSync => "force-sync",
            BotCommand::BotRename { .. } => "bot-rename",
            BotCommand::BotAvatar { .. } => "bot-avatar",
            BotCommand::BotPresence { .. } => "bot-presence",
            BotCommand::BotStatus { .. } => "bot-status",
        }
    }

    /// Commands restricted to the configured owners.
    pub fn is_owner_only(&self) -> bool {
        match self {
            BotCommand::BindTime { .. } | BotCommand::UnbindTime { .. } | BotCommand::ListTime => {
                false
            }
            BotCommand::ForceSync
            | BotCommand::BotRename { .. }
            | BotCommand::BotAvatar { .. }
            | BotCommand::BotPresence { .. }
            | BotCommand::BotStatus { .. } => true,
        }
    }
}
