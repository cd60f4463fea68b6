use anyhow::Result;
use matchbook::{migrate, DbConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DbConfig::from_env()?;

    // set up connection pool
    let pool = config.connect().await?;

    // Run migrations
    migrate(&pool).await?;

    tracing::info!(
        max_connections = config.max_connections,
        "database ready at {}",
        config.database_url
    );

    pool.close().await;
    Ok(())
}
