use std::env;

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_env")]
    pub env: String, // file / server
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default)]
    pub database_url: String,
    pub db_max_connections: Option<u32>,
    pub run_migrations: Option<bool>,
    pub log_dir: Option<String>,
    pub api_url: Option<String>,
}

fn default_env() -> String {
    "file".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_prefix() -> String {
    "/api".to_string()
}

impl Config {
    /// Where `get_config` read the variables from.
    pub fn env_source(&self) -> &'static str {
        if self.env == "file" {
            ".env file"
        } else {
            "server environment"
        }
    }

    pub fn api_url(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or(DEFAULT_API_URL.to_string())
    }
}

pub fn get_config() -> anyhow::Result<Config> {
    let env_var = env::var("env").unwrap_or("file".to_string());
    if env_var == "file" {
        let _ = dotenvy::dotenv();
    }
    envy::from_env::<Config>().context("failed to read configuration from environment")
}
