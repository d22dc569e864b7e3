pub mod models;
pub mod repositories;
pub mod schema;
pub mod store;

#[cfg(test)]
mod test_support;

use std::str::FromStr;

use eyre::{Result, WrapErr};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use tracing::info;

pub use store::SqliteBindingStore;

pub type DbPool = Pool<Sqlite>;

/// Open a pool on `database_url`, creating the database file if needed.
pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .wrap_err_with(|| format!("Invalid database URL: {database_url}"))?
        .create_if_missing(true);

    info!(database_url, "Connecting to database");

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
