use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use eyre::Result;
use serenity::all::{
    Command, CommandInteraction, CreateAutocompleteResponse, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditInteractionResponse, GuildId, Interaction,
};
use serenity::async_trait;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};
use voiceclock_core::catalog;
use voiceclock_core::reconcile::Reconciler;
use voiceclock_core::store::BindingStore;

use crate::commands::{self, BotCommand, CommandArgs};
use crate::config::BotConfig;
use crate::scheduler;

pub mod bot;
pub mod time;

/// Main Discord handler that processes all events.
///
/// Owns what every command needs: the configuration (owner allow-list
/// included), the binding store and the reconciliation engine shared with
/// the scheduler.
pub struct Handler {
    config: Arc<BotConfig>,
    store: Arc<dyn BindingStore>,
    reconciler: Arc<Reconciler>,
    shutdown: watch::Receiver<bool>,
    scheduler_started: AtomicBool,
}

impl Handler {
    pub fn new(
        config: Arc<BotConfig>,
        store: Arc<dyn BindingStore>,
        reconciler: Arc<Reconciler>,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            config,
            store,
            reconciler,
            shutdown,
            scheduler_started: AtomicBool::new(false),
        }
    }

    fn context(&self, ctx: Context) -> HandlerContext {
        HandlerContext {
            ctx,
            config: self.config.clone(),
            store: self.store.clone(),
            reconciler: self.reconciler.clone(),
        }
    }

    async fn register(&self, ctx: &Context) {
        let limit = self.config.call_timeout;

        if let Some(test_guild_id) = self.config.test_guild_id {
            let guild_id = GuildId::new(test_guild_id);
            let registered = bounded(
                "guild command registration",
                limit,
                guild_id.set_commands(&ctx.http, commands::register_commands()),
            )
            .await;
            if let Some(cmds) = registered {
                info!(
                    guild_id = test_guild_id,
                    count = cmds.len(),
                    "Guild commands registered"
                );
            }
        }

        let registered = bounded(
            "global command registration",
            limit,
            Command::set_global_commands(&ctx.http, commands::register_commands()),
        )
        .await;
        if let Some(cmds) = registered {
            info!(count = cmds.len(), "Global commands registered");
            for cmd in cmds {
                debug!("Command registered: /{} - {}", cmd.name, cmd.description);
            }
        }
    }

    async fn handle_command(&self, ctx: Context, command: &CommandInteraction) {
        info!(
            command = %command.data.name,
            user_id = %command.user.id,
            "Received command"
        );

        let args = CommandArgs::from_resolved(&command.data.options());
        let result = match BotCommand::parse(&command.data.name, &args) {
            Ok(parsed) if parsed.is_owner_only() && !self.config.is_owner(command.user.id.get()) => {
                warn!(
                    command = parsed.name(),
                    user_id = %command.user.id,
                    "Owner-only command rejected"
                );
                respond(
                    &ctx,
                    command,
                    "⛔ This command is restricted to the bot owners.",
                )
                .await
            }
            Ok(parsed) => self.dispatch(self.context(ctx.clone()), command, parsed).await,
            Err(e) => respond(&ctx, command, &format!("❌ {e}")).await,
        };

        if let Err(e) = result {
            error!(command = %command.data.name, error = ?e, "Error handling command");
            send_error(&ctx, command, &e).await;
        }
    }

    async fn dispatch(
        &self,
        ctx: HandlerContext,
        command: &CommandInteraction,
        parsed: BotCommand,
    ) -> Result<()> {
        match parsed {
            BotCommand::BindTime { timezone, channel } => {
                time::handle_bind(ctx, command, &timezone, &channel).await
            }
            BotCommand::UnbindTime { channel } => time::handle_unbind(ctx, command, &channel).await,
            BotCommand::ListTime => time::handle_list(ctx, command).await,
            BotCommand::ForceSync => time::handle_force_sync(ctx, command).await,
            BotCommand::BotRename { name } => bot::handle_rename(ctx, command, &name).await,
            BotCommand::BotAvatar { url } => bot::handle_avatar(ctx, command, &url).await,
            BotCommand::BotPresence { activity } => {
                bot::handle_presence(ctx, command, &activity).await
            }
            BotCommand::BotStatus { status } => bot::handle_status(ctx, command, status).await,
        }
    }

    async fn handle_autocomplete(&self, ctx: Context, command: &CommandInteraction) {
        let Some(focused) = command.data.autocomplete() else {
            return;
        };
        if focused.name != commands::OPT_TIMEZONE {
            return;
        }

        let response = autocomplete_choices(focused.value).into_iter().fold(
            CreateAutocompleteResponse::new(),
            |response, (name, value)| response.add_string_choice(name, value),
        );

        if let Err(why) = command
            .create_response(&ctx.http, CreateInteractionResponse::Autocomplete(response))
            .await
        {
            warn!(error = ?why, "Failed to send autocomplete choices");
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Handle ready events (when bot connects to Discord)
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);

        if let Some(activity) = &self.config.startup_activity {
            match activity.to_activity_data() {
                Ok(data) => ctx.set_activity(Some(data)),
                Err(e) => warn!(error = %e, "Startup activity rejected"),
            }
        }

        // `ready` fires again after a reconnect; the scheduler must start once.
        if !self.scheduler_started.swap(true, Ordering::SeqCst) {
            tokio::spawn(scheduler::run_scheduler(
                self.reconciler.clone(),
                self.config.sync_interval,
                self.shutdown.clone(),
            ));
        }

        self.register(&ctx).await;
    }

    /// Handle interactions (slash commands and autocomplete)
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Command(command) => self.handle_command(ctx, &command).await,
            Interaction::Autocomplete(command) => self.handle_autocomplete(ctx, &command).await,
            _ => {}
        }
    }
}

/// Shared context for command handlers.
pub struct HandlerContext {
    pub ctx: Context,
    pub config: Arc<BotConfig>,
    pub store: Arc<dyn BindingStore>,
    pub reconciler: Arc<Reconciler>,
}

/// Await `call` for at most `limit`. Failures and timeouts are logged and
/// yield `None`.
pub(crate) async fn bounded<T, E: std::fmt::Debug>(
    what: &str,
    limit: Duration,
    call: impl Future<Output = Result<T, E>>,
) -> Option<T> {
    match tokio::time::timeout(limit, call).await {
        Ok(Ok(value)) => Some(value),
        Ok(Err(e)) => {
            error!(error = ?e, "Error during {what}");
            None
        }
        Err(_) => {
            error!(?limit, "Timed out during {what}");
            None
        }
    }
}

/// Choices offered while the user types a timezone: `(label, key)` pairs.
pub fn autocomplete_choices(query: &str) -> Vec<(String, String)> {
    catalog::search(query)
        .into_iter()
        .map(|entry| (entry.choice_label(), entry.key.to_string()))
        .collect()
}

/// Send an ephemeral reply as the first response to `command`.
pub(crate) async fn respond(ctx: &Context, command: &CommandInteraction, content: &str) -> Result<()> {
    let response = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true);
    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(response))
        .await?;
    Ok(())
}

/// Replace the content of a deferred response.
pub(crate) async fn edit_response(
    ctx: &Context,
    command: &CommandInteraction,
    content: &str,
) -> Result<()> {
    command
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await?;
    Ok(())
}

async fn send_error(ctx: &Context, command: &CommandInteraction, e: &eyre::Report) {
    let content = format!("Error: {e}");
    // The handler may already have deferred, in which case only an edit is accepted.
    if respond(ctx, command, &content).await.is_err() {
        if let Err(why) = edit_response(ctx, command, &content).await {
            error!(error = ?why, "Failed to send error response");
        }
    }
}
