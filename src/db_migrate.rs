use color_eyre::eyre::Result;
use dotenv::dotenv;
use voiceclock_db::schema::initialize_database;

const DEFAULT_DATABASE_URL: &str = "sqlite://database.db";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Same variable the bot reads
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    println!("Connecting to {database_url}...");
    let db_pool = voiceclock_db::create_pool(&database_url).await?;

    println!("Initializing database schema...");
    initialize_database(&db_pool).await?;
    println!("Database schema initialized successfully.");

    db_pool.close().await;

    Ok(())
}
