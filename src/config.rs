use serde::{Deserialize, Serialize};

use crate::utils::pagination::PageSize;

/// Which order backend the console talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackendKind {
    Http,
    Memory,
}

impl BackendKind {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => BackendKind::Memory,
            _ => BackendKind::Http,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub backend: BackendKind,
    pub sign_in_path: String,
    pub default_page_size: usize,
    pub notification_timeout_ms: u32,
    pub network_timeout_seconds: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:3000".to_string(),
            backend_url_production: "https://api.example.com".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            backend: BackendKind::Http,
            sign_in_path: "/sign-in".to_string(),
            default_page_size: 5,
            notification_timeout_ms: 3000,
            network_timeout_seconds: 30,
        }
    }
}

impl AppConfig {
    /// Loads configuration from compile-time environment variables (see build.rs)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            backend: option_env!("ORDER_BACKEND")
                .map(BackendKind::parse)
                .unwrap_or(defaults.backend),
            sign_in_path: option_env!("SIGN_IN_PATH")
                .map(str::to_string)
                .unwrap_or(defaults.sign_in_path),
            default_page_size: option_env!("DEFAULT_PAGE_SIZE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_page_size),
            notification_timeout_ms: option_env!("NOTIFICATION_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.notification_timeout_ms),
            network_timeout_seconds: option_env!("NETWORK_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.network_timeout_seconds),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Backend URL for the current environment
    pub fn backend_url(&self) -> &str {
        if self.is_production() {
            &self.backend_url_production
        } else {
            &self.backend_url_development
        }
    }

    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            log::Level::Warn
        } else if self.is_production() {
            log::Level::Info
        } else {
            log::Level::Debug
        }
    }

    /// Configured page size if it is one of the allowed sizes, otherwise the smallest one
    pub fn default_page_size(&self) -> PageSize {
        PageSize::try_from(self.default_page_size).unwrap_or_default()
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
