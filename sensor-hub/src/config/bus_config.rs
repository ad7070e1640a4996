use serde::Deserialize;

use crate::bus::BusType;
use crate::errors::{ConfigError, ConfigResult};

/// Root structure for loading `[[bus]]` style TOML config
#[derive(Debug, Deserialize)]
pub struct BusConfig {
    #[serde(rename = "bus", default)]
    pub buses: Vec<BusEntry>,
}

/// One bus entry (an I2C adapter or a virtual bus)
#[derive(Debug, Clone, Deserialize)]
pub struct BusEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub r#type: String, // 'type' is a reserved word in Rust, use raw identifier
    #[serde(default)]
    pub path: Option<String>,
}

impl BusEntry {
    pub fn bus_type(&self) -> ConfigResult<BusType> {
        BusType::from_str(&self.r#type).ok_or_else(|| ConfigError::InvalidValue {
            field: format!("bus.{}.type", self.id),
            reason: format!("unknown bus type '{}'", self.r#type),
        })
    }
}

/// Parse and validate bus config text
pub fn parse_bus_config(content: &str) -> ConfigResult<BusConfig> {
    let parsed: BusConfig = toml::from_str(content)?;
    for entry in &parsed.buses {
        if entry.bus_type()? == BusType::I2C && entry.path.is_none() {
            return Err(ConfigError::InvalidValue {
                field: format!("bus.{}.path", entry.id),
                reason: "I2C buses need a device path".to_string(),
            });
        }
    }
    Ok(parsed)
}

/// Load bus config file
pub fn load_bus_config(path: &str) -> ConfigResult<BusConfig> {
    parse_bus_config(&super::read_config(path)?)
}
