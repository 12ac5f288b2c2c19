use std::time::Duration;

use anyhow::Context;
use sqlx::{migrate::Migrator, pool::PoolOptions, Pool, Postgres};

use crate::settings::Config;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn init_pool(config: &Config) -> anyhow::Result<Pool<Postgres>> {
    let pool = PoolOptions::new()
        .min_connections(1)
        .max_connections(config.db_max_connections.unwrap_or(20))
        .idle_timeout(Duration::from_secs(5))
        .connect(&config.database_url)
        .await
        .with_context(|| format!("failed to connect to database {}", config.database_url))?;
    Ok(pool)
}

pub async fn run_migrations(pool: &Pool<Postgres>) -> anyhow::Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .context("failed to run pending migrations")?;
    Ok(())
}
