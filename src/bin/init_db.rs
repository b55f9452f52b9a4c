//! Create the posts table and load the sample articles.
//!
//! Uses the same configuration as the server, so `TECHTRENDS_DATABASE_PATH`
//! points both at the same file. Re-running resets the table.

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use techtrends::db::{Database, init_db};
use techtrends::{BlogError, Config};

#[tokio::main]
async fn main() -> Result<(), BlogError> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    let db = Database::new(&cfg.database_path).with_create_if_missing(true);
    let seeded = init_db(&db).await?;
    info!(
        database_path = %cfg.database_path.display(),
        posts = seeded,
        "Initialized the database."
    );
    Ok(())
}
