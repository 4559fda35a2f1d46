//! Process configuration. Every secret comes from the environment and is
//! validated present before the server binds; nothing is embedded as a
//! literal.

use std::env;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub razorpay_key_id: String,
    pub razorpay_key_secret: String,
    /// Shared admin credential, checked on every admin call.
    pub admin_token: String,
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Missing(name)),
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: port
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", port.clone()))?,
            razorpay_key_id: required("RAZORPAY_KEY_ID")?,
            razorpay_key_secret: required("RAZORPAY_KEY_SECRET")?,
            admin_token: required("ADMIN_TOKEN")?,
        })
    }
}
