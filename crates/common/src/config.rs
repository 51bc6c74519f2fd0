//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (PostgreSQL)
    pub database_url: String,

    /// Object storage (bucket HTTP API)
    pub storage_url: String,
    pub storage_bucket: String,
    pub storage_service_key: String,

    /// Token signing secret
    pub jwt_secret: String,

    /// Runtime configuration
    pub log_level: String,
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL is required"))?,

            storage_url: env::var("STORAGE_URL")
                .map_err(|_| anyhow::anyhow!("STORAGE_URL is required"))?,
            storage_bucket: env::var("STORAGE_BUCKET")
                .map_err(|_| anyhow::anyhow!("STORAGE_BUCKET is required"))?,
            storage_service_key: env::var("STORAGE_SERVICE_KEY")
                .map_err(|_| anyhow::anyhow!("STORAGE_SERVICE_KEY is required"))?,

            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET is required"))?,

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "hawker=debug".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        };

        Ok(config)
    }
}
