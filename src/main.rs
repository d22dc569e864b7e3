use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use voiceclock_core::store::BindingStore;
use voiceclock_db::{SqliteBindingStore, create_pool, schema::initialize_database};
use voiceclock_discord_bot::config::BotConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Initialize logging
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting voiceclock Discord bot");

    // Load configuration
    let config = BotConfig::from_env()?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    let store = SqliteBindingStore::new(db_pool.clone());
    let bindings = store.all().await?;
    info!(count = bindings.len(), "Loaded channel bindings");

    // Start the Discord bot
    let result = voiceclock_discord_bot::start_bot(config, Arc::new(store)).await;

    db_pool.close().await;

    report_exit(result)
}

/// Log how the bot stopped. A failure is handed back so the process exits
/// non-zero.
fn report_exit(result: Result<()>) -> Result<()> {
    match &result {
        Ok(()) => info!("Discord bot shut down gracefully"),
        Err(e) => error!("Discord bot error: {:?}", e),
    }
    result
}

#[cfg(test)]
mod tests {
    use color_eyre::eyre::eyre;

    use super::*;

    #[test]
    fn test_report_exit_keeps_failure() {
        let result = report_exit(Err(eyre!("401 Unauthorized")));
        assert_eq!(result.unwrap_err().to_string(), "401 Unauthorized");
    }

    #[test]
    fn test_report_exit_passes_success() {
        assert!(report_exit(Ok(())).is_ok());
    }
}
