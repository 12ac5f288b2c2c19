use std::sync::Arc;

use sqlx::PgPool;

use crate::{settings::Config, AppState};

/// Config for route tests, nothing is read from the environment.
pub fn test_config() -> Config {
    Config {
        env: "test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        prefix: "/api".to_string(),
        database_url: String::new(),
        db_max_connections: None,
        run_migrations: None,
        log_dir: None,
        api_url: None,
    }
}

pub fn test_app_state(pool: PgPool) -> Arc<AppState> {
    Arc::new(AppState { db: pool })
}
