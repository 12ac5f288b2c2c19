use anyhow::Context;
use chrono::Utc;
use sqlx::{migrate::Migrate, PgPool};
use tokio::fs;

use crate::core::db::{run_migrations, MIGRATOR};

pub const MIGRATIONS_DIR: &str = "./migrations";

/// Create an empty reversible migration pair and return the file stem.
pub async fn db_generate(dir: &str, migration_name: &str) -> anyhow::Result<String> {
    let stem = format!(
        "{}_{}",
        Utc::now().format("%Y%m%d%H%M%S"),
        migration_name.trim().replace([' ', '-'], "_")
    );
    fs::create_dir_all(dir).await?;
    for direction in ["up", "down"] {
        let path = format!("{}/{}.{}.sql", dir, stem, direction);
        fs::write(&path, format!("-- {} {}\n", migration_name, direction))
            .await
            .with_context(|| format!("failed to write {}", path))?;
        println!("created {}", path);
    }
    Ok(stem)
}

/// (version, description, applied) for every embedded migration.
pub async fn db_list(pool: &PgPool) -> anyhow::Result<Vec<(i64, String, bool)>> {
    let mut conn = pool.acquire().await?;
    conn.ensure_migrations_table().await?;
    let applied: Vec<i64> = conn
        .list_applied_migrations()
        .await?
        .into_iter()
        .map(|m| m.version)
        .collect();
    let result: Vec<(i64, String, bool)> = MIGRATOR
        .iter()
        .filter(|m| m.migration_type.is_up_migration())
        .map(|m| {
            (
                m.version,
                m.description.to_string(),
                applied.contains(&m.version),
            )
        })
        .collect();
    for (version, description, is_applied) in result.iter() {
        let status = if *is_applied { "installed" } else { "pending" };
        println!("{}/{} {}", version, status, description);
    }
    Ok(result)
}

pub async fn db_migrate(pool: &PgPool) -> anyhow::Result<()> {
    run_migrations(pool).await
}

/// Revert the latest applied migration, returns its version.
pub async fn db_revert(pool: &PgPool) -> anyhow::Result<Option<i64>> {
    let mut conn = pool.acquire().await?;
    conn.ensure_migrations_table().await?;
    let mut applied: Vec<i64> = conn
        .list_applied_migrations()
        .await?
        .into_iter()
        .map(|m| m.version)
        .collect();
    drop(conn);
    applied.sort();
    let Some(latest) = applied.pop() else {
        println!("no migration to revert");
        return Ok(None);
    };
    let target = applied.last().copied().unwrap_or(0);
    MIGRATOR
        .undo(pool, target)
        .await
        .context("failed to revert migration")?;
    println!("reverted {}", latest);
    Ok(Some(latest))
}
