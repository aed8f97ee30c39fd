use crate::errors::{PricerError, PricerResult};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub debug: bool,
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 5000,
            debug: false,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> PricerResult<Self> {
        dotenvy::dotenv().ok();

        let server_port = env_var_or("SERVER_PORT", "5000")
            .parse::<u16>()
            .map_err(|e| PricerError::Config(format!("SERVER_PORT: {e}")))?;

        let debug = parse_bool(&env_var_or("APP_DEBUG", "false"))
            .ok_or_else(|| PricerError::Config("APP_DEBUG: expected true or false".into()))?;

        Ok(Self {
            server_host: env_var_or("SERVER_HOST", "127.0.0.1"),
            server_port,
            debug,
            static_dir: PathBuf::from(env_var_or("STATIC_DIR", "static")),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Log filter used when RUST_LOG is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
