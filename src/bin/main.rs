use std::{sync::Arc, time::Duration};

use people_cms::{core::logging::init_tracing, init_openapi_route, settings::get_config, AppState};
use poem::listener::TcpListener;
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = get_config()?;
    let _guard = init_tracing(config.log_dir.as_deref(), Level::DEBUG);
    tracing::info!("using {} as environment variable", config.env_source());
    tracing::info!("run with config: {:?}", config);

    // Init App State
    let app_state = Arc::new(AppState::connect(&config).await?);

    let app = init_openapi_route(app_state.clone(), &config);
    tracing::info!("run server on {}:{}", config.host, config.port);
    poem::Server::new(TcpListener::bind(format!(
        "{}:{}",
        config.host, config.port
    )))
    .run_with_graceful_shutdown(
        app,
        async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown signal received");
        },
        Some(Duration::from_secs(5)),
    )
    .await?;

    app_state.close().await;
    Ok(())
}
