mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
const DEFAULT_CONFIG_DIRECTORY: &str = ".eqviz";
const DEFAULT_CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_SESSION_DIRECTORY: &str = "session";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

/// Environment variable that relocates the whole config directory
pub const CONFIG_DIR_ENV: &str = "EQVIZ_CONFIG_DIR";
