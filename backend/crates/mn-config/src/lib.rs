mod config;
mod error;
mod graph_config;
mod log_level;
mod logging_config;
mod server_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use graph_config::GraphConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "MN_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".micronav";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_STORAGE_FILENAME: &str = "storage.json";
const DEFAULT_ADMIN_EMAIL: &str = "admin@micronav.com";

const DEFAULT_SEED_DEMO_DATA: bool = true;
const DEFAULT_STRICT_EDGES: bool = false;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
