use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use super::{
    MAX_BOT_NAME_LEN, MIN_BOT_NAME_LEN, OPT_DESCRIPTION, OPT_IMAGE, OPT_NAME, OPT_STATUS,
    OPT_TYPE, OPT_URL,
};
use crate::presence::{ActivityKind, MAX_ACTIVITY_TEXT, PresenceStatus};

pub fn bot_rename_command() -> CreateCommand {
    CreateCommand::new("bot-rename")
        .description("[Owner] Change the bot's username")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, OPT_NAME, "New username")
                .required(true)
                .min_length(MIN_BOT_NAME_LEN as u16)
                .max_length(MAX_BOT_NAME_LEN as u16),
        )
}

pub fn bot_avatar_command() -> CreateCommand {
    CreateCommand::new("bot-avatar")
        .description("[Owner] Change the bot's avatar")
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            OPT_URL,
            "Image URL (PNG, JPG, GIF)",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::Attachment,
            OPT_IMAGE,
            "Upload an image directly",
        ))
}

pub fn bot_presence_command() -> CreateCommand {
    let kind = ActivityKind::ALL.into_iter().fold(
        CreateCommandOption::new(CommandOptionType::String, OPT_TYPE, "Activity type")
            .required(true),
        |option, kind| option.add_string_choice(kind.label(), kind.as_str()),
    );

    CreateCommand::new("bot-presence")
        .description("[Owner] Change the bot's activity")
        .add_option(kind)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                OPT_DESCRIPTION,
                "Activity description",
            )
            .required(true)
            .max_length(MAX_ACTIVITY_TEXT as u16),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::String,
            OPT_URL,
            "Stream URL, used only with Streaming (Twitch/YouTube)",
        ))
}

pub fn bot_status_command() -> CreateCommand {
    let status = PresenceStatus::ALL.into_iter().fold(
        CreateCommandOption::new(CommandOptionType::String, OPT_STATUS, "Online status")
            .required(true),
        |option, status| option.add_string_choice(status.label(), status.as_str()),
    );

    CreateCommand::new("bot-status")
        .description("[Owner] Change the bot's online status")
        .add_option(status)
}
