mod config;
mod error;
mod log_level;
mod logging_config;
mod provider_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use provider_config::ProviderConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

/// Environment variable naming the config directory
pub const CONFIG_DIR_ENV: &str = "AUTHBRIDGE_CONFIG_DIR";
/// Config directory used when `AUTHBRIDGE_CONFIG_DIR` is unset, relative to cwd
pub const DEFAULT_CONFIG_DIR: &str = ".authbridge";
