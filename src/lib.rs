use std::sync::Arc;

use poem::{
    middleware::{AddData, AddDataEndpoint, Cors, CorsEndpoint},
    EndpointExt, Route,
};
use poem_openapi::OpenApiService;
use route::person::ApiPerson;
use settings::Config;
use sqlx::{Pool, Postgres};

pub mod cli;
pub mod core;
pub mod factory;
pub mod model;
pub mod repository;
pub mod route;
pub mod schema;
pub mod settings;
pub mod ui;

/// Everything a request handler needs, built once at startup.
pub struct AppState {
    pub db: Pool<Postgres>,
}

impl AppState {
    /// Connect to the database and, when configured, apply pending migrations.
    pub async fn connect(config: &Config) -> anyhow::Result<Self> {
        tracing::info!("Init Postgres connection on {}", config.database_url);
        let db = crate::core::db::init_pool(config).await?;
        if config.run_migrations.unwrap_or(false) {
            tracing::info!("run pending migrations");
            crate::core::db::run_migrations(&db).await?;
        }
        Ok(Self { db })
    }

    /// Wait for in-flight queries and release every pooled connection.
    pub async fn close(&self) {
        tracing::info!("close Postgres connection pool");
        self.db.close().await;
    }
}

pub fn init_openapi_route(
    app_state: Arc<AppState>,
    config: &Config,
) -> CorsEndpoint<AddDataEndpoint<Route, Arc<AppState>>> {
    let prefix = config.prefix.clone();
    let openapi_route = OpenApiService::new(ApiPerson, "People CMS", "1.0").server(prefix.clone());
    let openapi_json_endpoint = openapi_route.spec_endpoint();
    let ui = openapi_route.swagger_ui();
    Route::new()
        .nest(prefix, openapi_route)
        .nest("/docs", ui)
        .at("openapi.json", openapi_json_endpoint)
        .with(AddData::new(app_state))
        .with(Cors::new())
}
