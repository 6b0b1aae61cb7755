//! Configuration management for the circulation server

use config::{Config, ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;

use crate::models::loan::LoanPolicy;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CirculationConfig {
    /// Days a book may be held before it is overdue
    pub due_days: i64,
    /// Fee per day past the due period
    pub late_fee_per_day: Decimal,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub circulation: CirculationConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // CIRCULATION_CIRCULATION__DUE_DAYS=21 overrides circulation.due_days
            .add_source(
                Environment::with_prefix("CIRCULATION")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.circulation.validate()?;
        Ok(config)
    }
}

impl CirculationConfig {
    /// Reject policies that would make issue or return dates or fees unrepresentable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0..=LoanPolicy::MAX_DUE_DAYS).contains(&self.due_days) {
            return Err(ConfigError::Message(format!(
                "circulation.due_days must be between 0 and {}, got {}",
                LoanPolicy::MAX_DUE_DAYS,
                self.due_days
            )));
        }

        let max_fee = Decimal::from(LoanPolicy::MAX_LATE_FEE_PER_DAY);
        if self.late_fee_per_day < Decimal::ZERO || self.late_fee_per_day > max_fee {
            return Err(ConfigError::Message(format!(
                "circulation.late_fee_per_day must be between 0 and {}, got {}",
                max_fee, self.late_fee_per_day
            )));
        }

        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for CirculationConfig {
    fn default() -> Self {
        let policy = LoanPolicy::default();
        Self {
            due_days: policy.due_days,
            late_fee_per_day: policy.late_fee_per_day,
        }
    }
}

impl From<&CirculationConfig> for LoanPolicy {
    fn from(config: &CirculationConfig) -> Self {
        Self {
            due_days: config.due_days,
            late_fee_per_day: config.late_fee_per_day,
        }
    }
}
