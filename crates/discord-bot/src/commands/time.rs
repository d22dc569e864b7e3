use serenity::all::{ChannelType, CommandOptionType, CreateCommand, CreateCommandOption, Permissions};

use super::{OPT_CHANNEL, OPT_TIMEZONE};

/// Create command for binding a voice channel to a timezone
pub fn bind_time_command() -> CreateCommand {
    CreateCommand::new("bind-time")
        .description("Show the local time of a city in a voice channel's name")
        .dm_permission(false)
        .default_member_permissions(Permissions::MANAGE_CHANNELS)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                OPT_TIMEZONE,
                "City or country whose time to display (type to search)",
            )
            .required(true)
            .set_autocomplete(true),
        )
        .add_option(voice_channel_option("Voice channel to rename"))
}

/// Create command for removing a binding
pub fn unbind_time_command() -> CreateCommand {
    CreateCommand::new("unbind-time")
        .description("Stop updating a voice channel with the time")
        .dm_permission(false)
        .default_member_permissions(Permissions::MANAGE_CHANNELS)
        .add_option(voice_channel_option("Voice channel to stop updating"))
}

/// Create command for listing the bindings of the current server
pub fn list_time_command() -> CreateCommand {
    CreateCommand::new("list-time")
        .description("List the voice channels showing a time on this server")
        .dm_permission(false)
        .default_member_permissions(Permissions::MANAGE_CHANNELS)
}

/// Create command for running a reconciliation pass on demand
pub fn force_sync_command() -> CreateCommand {
    CreateCommand::new("force-sync").description("[Owner] Update every configured channel now")
}

fn voice_channel_option(description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Channel, OPT_CHANNEL, description)
        .required(true)
        .channel_types(vec![ChannelType::Voice])
}
