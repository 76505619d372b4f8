//! Configuration management

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_API_TIMEOUT_SECS, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_MENU_OPERATION,
    DEFAULT_STORAGE_DIR, DEFAULT_SUBSYSTEM, MENU_STORAGE_KEY,
};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ApiSettings,
    pub cache: CacheSettings,
    pub resolver: ResolverSettings,
    pub telemetry: TelemetrySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
}

/// Backend that serves the permission-scoped menu resources.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub subsystem: String,
    pub operation: String,
    #[serde(default)]
    pub token: Option<String>,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheSettings {
    pub storage_dir: PathBuf,
    pub storage_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResolverSettings {
    pub fetch_timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetrySettings {
    pub format: String,
    pub filter: String,
}

impl AppConfig {
    /// Load `config/default`, `config/{APP_ENV}` and `APP__*` environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load_from(Path::new("config"))
    }

    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::defaults()?
            .set_default("app.env", env.clone())?
            .add_source(File::from(dir.join("default")).required(false))
            .add_source(File::from(dir.join(&env)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.name", "menu-console")?
            .set_default("api.base_url", "http://127.0.0.1:3000/api")?
            .set_default("api.subsystem", DEFAULT_SUBSYSTEM)?
            .set_default("api.operation", DEFAULT_MENU_OPERATION)?
            .set_default("api.timeout_seconds", DEFAULT_API_TIMEOUT_SECS as i64)?
            .set_default("cache.storage_dir", DEFAULT_STORAGE_DIR)?
            .set_default("cache.storage_key", MENU_STORAGE_KEY)?
            .set_default("resolver.fetch_timeout_seconds", DEFAULT_FETCH_TIMEOUT_SECS as i64)?
            .set_default("telemetry.format", "json")?
            .set_default("telemetry.filter", "info")
    }
}
