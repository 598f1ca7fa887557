use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use strum::Display;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub toast: ToastConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Display, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// Behaviour of the notification shown after a submit
#[derive(Debug, Deserialize, Clone)]
pub struct ToastConfig {
    #[serde(default = "default_auto_close_ms")]
    pub auto_close_ms: u64,
    #[serde(default = "default_toast_position")]
    pub position: ToastPosition,
    #[serde(default = "default_true")]
    pub close_on_click: bool,
    #[serde(default = "default_true")]
    pub pause_on_hover: bool,
    #[serde(default = "default_true")]
    pub draggable: bool,
    #[serde(default = "default_true")]
    pub hide_progress_bar: bool,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            auto_close_ms: default_auto_close_ms(),
            position: default_toast_position(),
            close_on_click: true,
            pause_on_hover: true,
            draggable: true,
            hide_progress_bar: true,
        }
    }
}

fn default_auto_close_ms() -> u64 {
    3000
}

fn default_toast_position() -> ToastPosition {
    ToastPosition::TopCenter
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (CONTACT_FORM__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("observability.log_level", default_log_level())?
            .set_default("toast.auto_close_ms", default_auto_close_ms())?
            .set_default("toast.position", default_toast_position().to_string())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, a missing file just leaves the defaults in place
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("CONTACT_FORM")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.toast.auto_close_ms == 0 {
            return Err("Toast auto_close_ms must be greater than 0".to_string());
        }
        Ok(())
    }
}
