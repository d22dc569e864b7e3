//! Owner-only commands that change the bot's own identity and presence.

use eyre::Result;
use serenity::all::{CommandInteraction, CreateAttachment, EditProfile};
use tracing::{error, info};

use crate::handlers::{HandlerContext, edit_response, respond};
use crate::presence::{Activity, PresenceStatus};

pub async fn handle_rename(
    ctx: HandlerContext,
    command: &CommandInteraction,
    name: &str,
) -> Result<()> {
    command.defer_ephemeral(&ctx.ctx.http).await?;

    let mut user = ctx.ctx.cache.current_user().clone();
    let content = match user
        .edit(&ctx.ctx, EditProfile::new().username(name))
        .await
    {
        Ok(()) => {
            info!(user_id = %command.user.id, name, "Bot renamed");
            format!("✅ The bot is now called **{name}**")
        }
        Err(e) => {
            error!(error = ?e, "Failed to rename the bot");
            format!("❌ Failed to change the name: {e}")
        }
    };

    edit_response(&ctx.ctx, command, &content).await
}

pub async fn handle_avatar(
    ctx: HandlerContext,
    command: &CommandInteraction,
    url: &str,
) -> Result<()> {
    command.defer_ephemeral(&ctx.ctx.http).await?;

    let result = async {
        let avatar = CreateAttachment::url(&ctx.ctx.http, url).await?;
        let mut user = ctx.ctx.cache.current_user().clone();
        user.edit(&ctx.ctx, EditProfile::new().avatar(&avatar)).await
    }
    .await;

    let content = match result {
        Ok(()) => {
            info!(user_id = %command.user.id, url, "Bot avatar changed");
            "✅ The bot's avatar was changed".to_string()
        }
        Err(e) => {
            error!(error = ?e, url, "Failed to change the bot avatar");
            format!("❌ Failed to change the avatar: {e}")
        }
    };

    edit_response(&ctx.ctx, command, &content).await
}

pub async fn handle_presence(
    ctx: HandlerContext,
    command: &CommandInteraction,
    activity: &Activity,
) -> Result<()> {
    let data = activity.to_activity_data()?;
    ctx.ctx.set_activity(Some(data));

    info!(
        user_id = %command.user.id,
        kind = activity.kind.as_str(),
        text = %activity.text,
        "Bot activity changed"
    );

    respond(&ctx.ctx, command, &format!("✅ Bot activity changed: {activity}")).await
}

pub async fn handle_status(
    ctx: HandlerContext,
    command: &CommandInteraction,
    status: PresenceStatus,
) -> Result<()> {
    match status {
        PresenceStatus::Online => ctx.ctx.online(),
        PresenceStatus::Idle => ctx.ctx.idle(),
        PresenceStatus::DoNotDisturb => ctx.ctx.dnd(),
        PresenceStatus::Invisible => ctx.ctx.invisible(),
    }

    info!(user_id = %command.user.id, status = status.as_str(), "Bot status changed");

    respond(
        &ctx.ctx,
        command,
        &format!("✅ Bot status changed to **{}**", status.label()),
    )
    .await
}
