use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

pub const MAX_LATENCY_MS: u64 = 60_000;
pub const MIN_SMS_CODE_LENGTH: usize = 4;
pub const MAX_SMS_CODE_LENGTH: usize = 8;

/// Settings of the in-process authentication provider.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Artificial completion delay for every provider operation
    pub latency_ms: u64,
    /// Fixed SMS code to issue instead of a random one
    pub sms_code: Option<String>,
}

impl ProviderConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.latency_ms > MAX_LATENCY_MS {
            return Err(ConfigError::provider(format!(
                "provider.latency_ms must be 0-{}, got {}",
                MAX_LATENCY_MS, self.latency_ms
            )));
        }

        if let Some(code) = &self.sms_code {
            let length_ok = (MIN_SMS_CODE_LENGTH..=MAX_SMS_CODE_LENGTH).contains(&code.len());
            if !length_ok || !code.chars().all(|c| c.is_ascii_digit()) {
                return Err(ConfigError::provider(format!(
                    "provider.sms_code must be {}-{} digits",
                    MIN_SMS_CODE_LENGTH, MAX_SMS_CODE_LENGTH
                )));
            }
        }

        Ok(())
    }
}
