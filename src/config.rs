use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use dotenvy::dotenv;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    /// Directory holding the stored collections
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,

    // Rate limiting
    pub rate_per_min: u32,

    pub api_prefix: String,
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let rate_per_min = var_or("RATE_PER_MIN", "600");

        Ok(Self {
            server_addr: var_or("SERVER_ADDR", "127.0.0.1:8080"),
            data_dir: var_or("DATA_DIR", "data").into(),
            log_dir: var_or("LOG_DIR", "logs").into(),
            rate_per_min: rate_per_min
                .parse()
                .with_context(|| format!("RATE_PER_MIN must be a number, got {rate_per_min:?}"))?,
            api_prefix: var_or("API_PREFIX", "/api"),
        })
    }
}
