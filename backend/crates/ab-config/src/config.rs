use crate::{
    CONFIG_DIR_ENV, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR, LoggingConfig,
    ProviderConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub provider: ProviderConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for AUTHBRIDGE_CONFIG_DIR env var, else use ./.authbridge/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply AUTHBRIDGE_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: AUTHBRIDGE_CONFIG_DIR env var > ./.authbridge/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.provider.validate()?;

        if let Some(file) = &self.logging.file
            && (file.trim().is_empty() || file.contains(".."))
        {
            return Err(ConfigError::logging(
                "logging.file must be a non-empty name without '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };

        let dir = Path::new(&self.logging.dir);
        let dir = if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            Self::config_dir()?.join(dir)
        };
        Ok(Some(dir.join(file)))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max {} connections, buffer={})",
            self.server.host,
            self.server.port,
            self.server.max_connections,
            self.server.send_buffer_size
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  provider: latency={}ms, fixed sms code: {}",
            self.provider.latency_ms,
            if self.provider.sms_code.is_some() {
                "yes"
            } else {
                "no"
            }
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("AUTHBRIDGE_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("AUTHBRIDGE_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "AUTHBRIDGE_SERVER_MAX_CONNECTIONS",
            &mut self.server.max_connections,
        );
        Self::apply_env_parse(
            "AUTHBRIDGE_SERVER_SEND_BUFFER_SIZE",
            &mut self.server.send_buffer_size,
        );

        // Logging
        Self::apply_env_parse("AUTHBRIDGE_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("AUTHBRIDGE_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("AUTHBRIDGE_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("AUTHBRIDGE_LOG_DIR", &mut self.logging.dir);

        // Provider
        Self::apply_env_parse("AUTHBRIDGE_PROVIDER_LATENCY_MS", &mut self.provider.latency_ms);
        Self::apply_env_option_string("AUTHBRIDGE_PROVIDER_SMS_CODE", &mut self.provider.sms_code);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
