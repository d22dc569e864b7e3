use eyre::{Result, eyre};
use serenity::all::CommandInteraction;
use tracing::info;
use voiceclock_core::catalog;
use voiceclock_core::errors::GatewayError;
use voiceclock_core::models::binding::{ChannelBinding, NewBinding};
use voiceclock_core::models::timezone::TimezoneEntry;
use voiceclock_core::reconcile::{PassOutcome, RowOutcome, SyncReport};

use crate::commands::ChannelRef;
use crate::handlers::{HandlerContext, edit_response, respond};

/// Handle /bind-time: store the binding and rename the channel right away.
pub async fn handle_bind(
    ctx: HandlerContext,
    command: &CommandInteraction,
    timezone: &str,
    channel: &ChannelRef,
) -> Result<()> {
    let guild_id = command
        .guild_id
        .ok_or_else(|| eyre!("This command can only be used in a server"))?;

    let channel_id = channel.id.to_string();
    let existing = ctx.store.by_channel(&channel_id).await?;
    let entry = match check_bind(existing.as_ref(), timezone, channel) {
        Ok(entry) => entry,
        Err(rejection) => return respond(&ctx.ctx, command, &rejection).await,
    };

    // The first rename can take a while behind rate limits.
    command.defer_ephemeral(&ctx.ctx.http).await?;

    let binding = ctx
        .store
        .upsert(NewBinding {
            channel_id,
            guild_id: guild_id.to_string(),
            timezone_key: entry.key.to_string(),
            created_by: Some(command.user.id.to_string()),
        })
        .await?;

    info!(
        channel_id = %binding.channel_id,
        guild_id = %binding.guild_id,
        timezone = %binding.timezone_key,
        "Channel bound"
    );

    let outcome = ctx.reconciler.reconcile_exclusive(&binding).await;
    edit_response(&ctx.ctx, command, &bind_outcome_message(channel, entry, &outcome)).await
}

/// Handle /unbind-time.
pub async fn handle_unbind(
    ctx: HandlerContext,
    command: &CommandInteraction,
    channel: &ChannelRef,
) -> Result<()> {
    let channel_id = channel.id.to_string();

    if ctx.store.by_channel(&channel_id).await?.is_none() {
        return respond(
            &ctx.ctx,
            command,
            &format!("❌ {} is not configured to show the time.", channel.mention()),
        )
        .await;
    }

    ctx.store.remove(&channel_id).await?;
    info!(channel_id = %channel_id, "Channel unbound");

    respond(
        &ctx.ctx,
        command,
        &format!(
            "✅ {} will no longer be updated automatically.",
            channel.mention()
        ),
    )
    .await
}

/// Handle /list-time for the invoking guild.
pub async fn handle_list(ctx: HandlerContext, command: &CommandInteraction) -> Result<()> {
    let guild_id = command
        .guild_id
        .ok_or_else(|| eyre!("This command can only be used in a server"))?;

    let bindings = ctx.store.by_guild(&guild_id.to_string()).await?;
    respond(&ctx.ctx, command, &render_binding_list(&bindings)).await
}

/// Handle /force-sync: run a pass now and report its counts.
pub async fn handle_force_sync(ctx: HandlerContext, command: &CommandInteraction) -> Result<()> {
    command.defer_ephemeral(&ctx.ctx.http).await?;

    info!(user_id = %command.user.id, "Forced reconciliation pass");
    let outcome = ctx.reconciler.run_pass().await;

    edit_response(&ctx.ctx, command, &render_pass_outcome(&outcome)).await
}

/// Validate a bind request against the catalog and the channel's current
/// binding. `Err` carries the reply explaining the rejection.
pub fn check_bind(
    existing: Option<&ChannelBinding>,
    timezone: &str,
    channel: &ChannelRef,
) -> Result<&'static TimezoneEntry, String> {
    let Some(entry) = catalog::lookup(timezone) else {
        return Err(format!(
            "❌ Unknown timezone: `{timezone}`\n\nPick one of the suggestions offered while typing."
        ));
    };

    match existing {
        Some(binding) if binding.timezone_key == entry.key => Err(format!(
            "⚠️ {} is already showing **{} {}**!",
            channel.mention(),
            entry.symbol,
            entry.display_name
        )),
        _ => Ok(entry),
    }
}

pub fn render_binding_list(bindings: &[ChannelBinding]) -> String {
    if bindings.is_empty() {
        return "📋 No channels are configured in this server.".to_string();
    }

    let mut list = String::from("📋 **Configured channels:**\n\n");
    for binding in bindings {
        match catalog::lookup(&binding.timezone_key) {
            Some(entry) => list.push_str(&format!(
                "• <#{}> → {} {} ({})\n",
                binding.channel_id, entry.symbol, entry.display_name, entry.utc_label
            )),
            None => list.push_str(&format!(
                "• <#{}> → ⚠️ Unknown timezone: {}\n",
                binding.channel_id, binding.timezone_key
            )),
        }
    }
    list
}

pub fn render_pass_outcome(outcome: &PassOutcome) -> String {
    match outcome {
        PassOutcome::Completed(report) => render_sync_report(report),
        PassOutcome::AlreadyRunning => {
            "⏳ A sync is already running, try again in a moment.".to_string()
        }
    }
}

pub fn render_sync_report(report: &SyncReport) -> String {
    let mut message = format!(
        "🔄 Sync finished: **{}** updated, **{}** skipped, **{}** errors",
        report.updated, report.skipped, report.errors
    );
    if report.pruned > 0 {
        message.push_str(&format!(
            "\n🧹 {} stale binding(s) removed",
            report.pruned
        ));
    }
    if report.cancelled {
        message.push_str("\n⏹️ Interrupted by shutdown before every channel was visited");
    }
    message
}

pub fn bind_outcome_message(
    channel: &ChannelRef,
    entry: &TimezoneEntry,
    outcome: &RowOutcome,
) -> String {
    let shown = format!(
        "**{} {}** ({})",
        entry.symbol, entry.display_name, entry.utc_label
    );
    let mention = channel.mention();

    match outcome {
        RowOutcome::Renamed(label) => {
            format!("✅ {mention} will now show the time of {shown}\n\nNew name: `{label}`")
        }
        RowOutcome::Unchanged => {
            format!("✅ {mention} will now show the time of {shown}\n\nIts name is already up to date.")
        }
        RowOutcome::NotVoice => format!(
            "⚠️ Binding saved, but {mention} is not a voice channel and will not be renamed."
        ),
        RowOutcome::UnknownTimezone => format!(
            "⚠️ Binding saved, but the time of {shown} could not be computed."
        ),
        RowOutcome::Stale { .. } => {
            format!("❌ {mention} no longer exists, the binding was discarded.")
        }
        RowOutcome::Failed(GatewayError::PermissionDenied | GatewayError::AccessRevoked) => {
            format!(
                "❌ Binding saved, but renaming {mention} failed.\n\nMake sure the bot has the Manage Channels permission there."
            )
        }
        RowOutcome::Failed(e) => format!(
            "⚠️ Binding saved, but renaming {mention} failed: {e}\n\nIt will be retried on the next sync."
        ),
    }
}
