use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// JSON savings-rate table; built-in rates when unset.
    pub savings_rates_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("SP_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:5000".to_string())
            .parse()
            .context("Invalid SP_LISTEN_ADDR")?;
        let db_path = std::env::var("SP_DB_PATH").unwrap_or_else(|_| "./db/finance.db".into());
        let cors_allow = std::env::var("SP_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("SP_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let savings_rates_path = std::env::var("SP_SAVINGS_RATES_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            savings_rates_path,
        })
    }

    /// Defaults for everything except the database file.
    pub fn with_db_path(db_path: impl Into<String>) -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            db_path: db_path.into(),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
            savings_rates_path: None,
        }
    }
}
