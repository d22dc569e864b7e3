use std::env;
use std::time::Duration;

use eyre::{Result, eyre};

use crate::presence::{Activity, ActivityKind};

const DEFAULT_DATABASE_URL: &str = "sqlite://database.db";
const DEFAULT_SYNC_INTERVAL_SECONDS: u64 = 300;
const DEFAULT_CALL_TIMEOUT_SECONDS: u64 = 10;
const DEFAULT_SHUTDOWN_GRACE_SECONDS: u64 = 10;

/// Configuration for the Discord bot.
///
/// Everything the bot needs at startup: the Discord credentials, where the
/// channel bindings live, who may run owner-only commands, and the timing of
/// the reconciliation loop.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Discord bot token (required)
    pub token: String,
    /// SQLite connection URL
    pub database_url: String,
    /// Users allowed to run owner-only commands
    pub owner_ids: Vec<u64>,
    /// Period of the reconciliation scheduler
    pub sync_interval: Duration,
    /// Upper bound for a single Discord call made by the reconciliation engine
    pub call_timeout: Duration,
    /// How long shutdown waits for an in-flight pass
    pub shutdown_grace: Duration,
    /// Test guild ID for faster command registration during development
    pub test_guild_id: Option<u64>,
    /// Activity shown once the bot is connected
    pub startup_activity: Option<Activity>,
}

impl BotConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup("DISCORD_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| eyre!("DISCORD_TOKEN environment variable not set"))?;

        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let owner_ids = match lookup("OWNER_IDS") {
            Some(raw) => parse_owner_ids(&raw)?,
            None => Vec::new(),
        };

        let sync_interval = seconds(&lookup, "SYNC_INTERVAL_SECONDS", DEFAULT_SYNC_INTERVAL_SECONDS)?;
        let call_timeout = seconds(
            &lookup,
            "DISCORD_CALL_TIMEOUT_SECONDS",
            DEFAULT_CALL_TIMEOUT_SECONDS,
        )?;
        let shutdown_grace = seconds(
            &lookup,
            "SHUTDOWN_GRACE_SECONDS",
            DEFAULT_SHUTDOWN_GRACE_SECONDS,
        )?;

        // Optional test guild ID for development
        let test_guild_id = lookup("DISCORD_TEST_GUILD_ID")
            .map(|id| {
                id.trim()
                    .parse::<u64>()
                    .map_err(|_| eyre!("DISCORD_TEST_GUILD_ID must be a valid u64"))
            })
            .transpose()?;

        let startup_activity = match (lookup("BOT_ACTIVITY_TYPE"), lookup("BOT_ACTIVITY_NAME")) {
            (Some(kind), Some(text)) => {
                let kind: ActivityKind = kind.parse()?;
                Some(Activity::new(kind, text, lookup("BOT_ACTIVITY_URL"))?)
            }
            (None, None) => None,
            _ => {
                return Err(eyre!(
                    "BOT_ACTIVITY_TYPE and BOT_ACTIVITY_NAME must be set together"
                ));
            }
        };

        Ok(Self {
            token,
            database_url,
            owner_ids,
            sync_interval,
            call_timeout,
            shutdown_grace,
            test_guild_id,
            startup_activity,
        })
    }

    pub fn is_owner(&self, user_id: u64) -> bool {
        self.owner_ids.contains(&user_id)
    }
}

fn parse_owner_ids(raw: &str) -> Result<Vec<u64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse::<u64>()
                .map_err(|_| eyre!("OWNER_IDS contains an invalid user id: {id}"))
        })
        .collect()
}

fn seconds(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> Result<Duration> {
    let value = match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| eyre!("{key} must be a whole number of seconds"))?,
        None => default,
    };

    if value == 0 {
        return Err(eyre!("{key} must be greater than zero"));
    }

    Ok(Duration::from_secs(value))
}
