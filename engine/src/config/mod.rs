//! Configuration for the progress engine
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FP__)

use anyhow::Result;
use fitter_progress_shared::energy::EnergySettings;
use serde::{Deserialize, Serialize};
use std::env;

use crate::services::ProgressSettings;

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub tuning: TuningConfig,
}

/// Remote workout API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Local storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the key-value store files
    pub dir: String,
}

/// The engine's tunable constants
///
/// These numbers were inherited from the original product with no recorded
/// justification, so they are kept configurable rather than hardcoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuningConfig {
    pub seconds_per_rep: f64,
    pub default_met: f64,
    pub percent_per_entry: f64,
    pub calorie_goal: f64,
}

impl Default for TuningConfig {
    fn default() -> Self {
        let energy = EnergySettings::default();
        let progress = ProgressSettings::default();
        Self {
            seconds_per_rep: energy.seconds_per_rep,
            default_met: energy.default_met,
            percent_per_entry: progress.percent_per_entry,
            calorie_goal: progress.calorie_goal,
        }
    }
}

impl TuningConfig {
    /// Settings slice consumed by the calorie estimator
    pub fn energy(&self) -> EnergySettings {
        EnergySettings {
            seconds_per_rep: self.seconds_per_rep,
            default_met: self.default_met,
        }
    }

    /// Settings slice consumed by progress aggregation
    pub fn progress(&self) -> ProgressSettings {
        ProgressSettings {
            percent_per_entry: self.percent_per_entry,
            calorie_goal: self.calorie_goal,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://fitter-me-backend-1.onrender.com".to_string(),
                timeout_secs: 10,
            },
            storage: StorageConfig {
                dir: "data".to_string(),
            },
            tuning: TuningConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FP__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&EngineConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (FP__ prefix)
            // e.g., FP__API__TIMEOUT_SECS=30 sets api.timeout_secs
            .add_source(config::Environment::with_prefix("FP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
