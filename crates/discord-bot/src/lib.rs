use std::sync::Arc;

use eyre::Result;
use serenity::{Client, http::Http, prelude::GatewayIntents};
use tokio::sync::watch;
use tracing::{error, info, warn};
use voiceclock_core::reconcile::Reconciler;
use voiceclock_core::store::BindingStore;

pub mod commands;
pub mod config;
pub mod gateway;
pub mod handlers;
pub mod presence;
pub mod scheduler;

/// Start the Discord bot and run it until a shutdown signal arrives.
///
/// Wires the binding store and a [`gateway::SerenityGateway`] into the
/// reconciliation engine, connects to the gateway, and on SIGINT/SIGTERM
/// stops the shards and waits up to `shutdown_grace` for an in-flight pass.
///
/// # Returns
///
/// * `Ok(())` if the bot shut down gracefully
/// * `Err` if an error occurred during initialization or operation
pub async fn start_bot(config: config::BotConfig, store: Arc<dyn BindingStore>) -> Result<()> {
    info!("Starting Discord bot");

    let config = Arc::new(config);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let gateway = Arc::new(gateway::SerenityGateway::new(Arc::new(Http::new(
        &config.token,
    ))));
    let reconciler = Arc::new(
        Reconciler::new(store.clone(), gateway, config.call_timeout)
            .with_shutdown(shutdown_rx.clone()),
    );

    let handler = handlers::Handler::new(config.clone(), store, reconciler.clone(), shutdown_rx);

    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_VOICE_STATES;
    let mut client = Client::builder(&config.token, intents)
        .event_handler(handler)
        .await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        info!("Shutdown signal received");
        let _ = shutdown_tx.send(true);
        shard_manager.shutdown_all().await;
    });

    info!("Connecting to Discord...");
    client.start().await?;

    if reconciler.drain(config.shutdown_grace).await {
        info!("Discord bot stopped");
    } else {
        warn!(
            grace = ?config.shutdown_grace,
            "Reconciliation pass still running after the grace period"
        );
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
