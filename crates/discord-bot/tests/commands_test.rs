use pretty_assertions::assert_eq;
use rstest::rstest;
use serenity::all::ChannelId;
use voiceclock_core::errors::ClockError;
use voiceclock_discord_bot::commands::{
    self, ArgValue, BotCommand, ChannelRef, CommandArgs, OPT_CHANNEL, OPT_DESCRIPTION, OPT_IMAGE,
    OPT_NAME, OPT_STATUS, OPT_TIMEZONE, OPT_TYPE, OPT_URL,
};
use voiceclock_discord_bot::presence::{ActivityKind, PresenceStatus};

fn channel(id: u64) -> ChannelRef {
    ChannelRef {
        id: ChannelId::new(id),
        name: Some("general".to_string()),
    }
}

fn text(value: &str) -> ArgValue {
    ArgValue::Str(value.to_string())
}

fn assert_validation(result: Result<BotCommand, ClockError>) {
    assert!(
        matches!(result, Err(ClockError::Validation(_))),
        "expected a validation error, got {result:?}"
    );
}

#[test]
fn test_register_commands() {
    assert_eq!(commands::register_commands().len(), 8);
}

#[test]
fn test_parse_bind_time() {
    let args = CommandArgs::new()
        .with(OPT_TIMEZONE, text(" paris "))
        .with(OPT_CHANNEL, ArgValue::Channel(channel(42)));

    let parsed = BotCommand::parse("bind-time", &args).unwrap();
    assert_eq!(
        parsed,
        BotCommand::BindTime {
            timezone: "paris".to_string(),
            channel: channel(42),
        }
    );
}

#[test]
fn test_parse_bind_time_requires_both_options() {
    let only_timezone = CommandArgs::new().with(OPT_TIMEZONE, text("paris"));
    assert_validation(BotCommand::parse("bind-time", &only_timezone));

    let only_channel = CommandArgs::new().with(OPT_CHANNEL, ArgValue::Channel(channel(42)));
    assert_validation(BotCommand::parse("bind-time", &only_channel));
}

#[test]
fn test_parse_commands_without_options() {
    let empty = CommandArgs::new();
    assert_eq!(BotCommand::parse("list-time", &empty).unwrap(), BotCommand::ListTime);
    assert_eq!(BotCommand::parse("force-sync", &empty).unwrap(), BotCommand::ForceSync);
}

#[test]
fn test_parse_unknown_command() {
    assert_validation(BotCommand::parse("timezone", &CommandArgs::new()));
}

#[rstest]
#[case("Clock", true)]
#[case("ab", true)]
#[case("a", false)]
#[case("   ", false)]
#[case("a-name-that-is-way-longer-than-32", false)]
fn test_parse_bot_rename_length(#[case] name: &str, #[case] valid: bool) {
    let args = CommandArgs::new().with(OPT_NAME, text(name));
    let result = BotCommand::parse("bot-rename", &args);
    if valid {
        assert_eq!(
            result.unwrap(),
            BotCommand::BotRename {
                name: name.to_string()
            }
        );
    } else {
        assert_validation(result);
    }
}

#[test]
fn test_parse_bot_avatar_prefers_attachment() {
    let args = CommandArgs::new()
        .with(OPT_URL, text("https://example.com/a.png"))
        .with(
            OPT_IMAGE,
            ArgValue::Attachment {
                url: "https://cdn.example.com/b.png".to_string(),
            },
        );

    assert_eq!(
        BotCommand::parse("bot-avatar", &args).unwrap(),
        BotCommand::BotAvatar {
            url: "https://cdn.example.com/b.png".to_string()
        }
    );

    let url_only = CommandArgs::new().with(OPT_URL, text("https://example.com/a.png"));
    assert_eq!(
        BotCommand::parse("bot-avatar", &url_only).unwrap(),
        BotCommand::BotAvatar {
            url: "https://example.com/a.png".to_string()
        }
    );

    assert_validation(BotCommand::parse("bot-avatar", &CommandArgs::new()));
}

#[test]
fn test_parse_bot_presence() {
    let args = CommandArgs::new()
        .with(OPT_TYPE, text("watching"))
        .with(OPT_DESCRIPTION, text("the clocks"))
        .with(OPT_URL, text("https://twitch.tv/ignored"));

    let BotCommand::BotPresence { activity } = BotCommand::parse("bot-presence", &args).unwrap()
    else {
        panic!("expected a presence command");
    };
    assert_eq!(activity.kind, ActivityKind::Watching);
    assert_eq!(activity.text, "the clocks");
    assert_eq!(activity.url, None);
}

#[test]
fn test_parse_bot_presence_streaming_requires_url() {
    let args = CommandArgs::new()
        .with(OPT_TYPE, text("streaming"))
        .with(OPT_DESCRIPTION, text("live"));
    assert_validation(BotCommand::parse("bot-presence", &args));

    let with_url = args.with(OPT_URL, text("https://twitch.tv/someone"));
    let BotCommand::BotPresence { activity } =
        BotCommand::parse("bot-presence", &with_url).unwrap()
    else {
        panic!("expected a presence command");
    };
    assert_eq!(activity.url.as_deref(), Some("https://twitch.tv/someone"));
}

#[rstest]
#[case("online", PresenceStatus::Online)]
#[case("idle", PresenceStatus::Idle)]
#[case("dnd", PresenceStatus::DoNotDisturb)]
#[case("INVISIBLE", PresenceStatus::Invisible)]
fn test_parse_bot_status(#[case] raw: &str, #[case] expected: PresenceStatus) {
    let args = CommandArgs::new().with(OPT_STATUS, text(raw));
    assert_eq!(
        BotCommand::parse("bot-status", &args).unwrap(),
        BotCommand::BotStatus { status: expected }
    );
}

#[test]
fn test_parse_bot_status_rejects_unknown() {
    let args = CommandArgs::new().with(OPT_STATUS, text("away"));
    assert_validation(BotCommand::parse("bot-status", &args));
}

#[rstest]
#[case("bind-time", false)]
#[case("unbind-time", false)]
#[case("list-time", false)]
#[case("force-sync", true)]
#[case("bot-rename", true)]
#[case("bot-avatar", true)]
#[case("bot-presence", true)]
#[case("bot-status", true)]
fn test_owner_only_commands(#[case] name: &str, #[case] owner_only: bool) {
    let args = CommandArgs::new()
        .with(OPT_TIMEZONE, text("paris"))
        .with(OPT_CHANNEL, ArgValue::Channel(channel(42)))
        .with(OPT_NAME, text("Clock"))
        .with(OPT_URL, text("https://example.com/a.png"))
        .with(OPT_TYPE, text("playing"))
        .with(OPT_DESCRIPTION, text("with time"))
        .with(OPT_STATUS, text("idle"));

    let parsed = BotCommand::parse(name, &args).unwrap();
    assert_eq!(parsed.name(), name);
    assert_eq!(parsed.is_owner_only(), owner_only);
}
