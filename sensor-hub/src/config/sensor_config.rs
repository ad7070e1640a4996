use std::collections::HashSet;
use std::time::Duration;

use serde::Deserialize;

use crate::errors::{ConfigError, ConfigResult};
use crate::hal::OperatingMode;

/// Polling period used when a sensor entry does not set one
pub const DEFAULT_MIN_DELAY_MS: u64 = 200;

/// Root configuration struct expecting `[[sensor]]` TOML array format
#[derive(Debug, Deserialize)]
pub struct SensorConfig {
    #[serde(rename = "sensor", default)]
    pub sensors: Vec<SensorEntry>,
}

/// One sensor entry, matching each `[[sensor]]` section
#[derive(Debug, Clone, Deserialize)]
pub struct SensorEntry {
    pub id: String,
    /// Registered driver name, e.g. `virtual_sht3x`
    pub driver: String,
    pub bus: String,
    #[serde(default)]
    pub mode: OperatingMode,
    #[serde(default = "default_min_delay_ms")]
    pub min_delay_ms: u64,
}

fn default_min_delay_ms() -> u64 {
    DEFAULT_MIN_DELAY_MS
}

impl SensorEntry {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.min_delay_ms)
    }
}

/// Parse and validate sensor config text
pub fn parse_sensor_config(content: &str) -> ConfigResult<SensorConfig> {
    let parsed: SensorConfig = toml::from_str(content)?;
    validate(&parsed)?;
    Ok(parsed)
}

fn validate(config: &SensorConfig) -> ConfigResult<()> {
    let mut ids = HashSet::new();
    for s in &config.sensors {
        if !ids.insert(s.id.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: format!("sensor.{}.id", s.id),
                reason: "duplicate sensor id".to_string(),
            });
        }
        if s.mode == OperatingMode::Interrupt {
            return Err(ConfigError::InvalidValue {
                field: format!("sensor.{}.mode", s.id),
                reason: "only polling mode is supported".to_string(),
            });
        }
        if s.min_delay_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: format!("sensor.{}.min_delay_ms", s.id),
                reason: "must be greater than zero".to_string(),
            });
        }
    }
    Ok(())
}

/// Loads config from TOML file
pub fn load_sensor_config(path: &str) -> ConfigResult<SensorConfig> {
    parse_sensor_config(&super::read_config(path)?)
}
