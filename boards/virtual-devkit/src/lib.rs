/// Board-specific constants and configuration for the virtual devkit
///
/// This board carries only simulated parts:
/// - SHT3x and HTS221 humiture sensors
/// - a 6-axis IMU at rest
/// - an RGBW ambient light sensor

/// Default configuration directory (embedded at compile time)
pub const CONFIG_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/config");

/// Embedded TOML configurations
pub const BUSES_TOML: &str = include_str!("../config/buses.toml");
pub const SENSORS_TOML: &str = include_str!("../config/sensors.toml");

/// Board name
pub const BOARD_NAME: &str = "Virtual-Devkit";

/// Get the configuration path (allow override via CONFIG_PATH env var)
pub fn get_config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| CONFIG_DIR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensor_hub::config::{parse_bus_config, parse_sensor_config};
    use sensor_hub::{init_all, Registry};

    #[test]
    fn test_embedded_config_initializes() {
        let buses = parse_bus_config(BUSES_TOML).unwrap();
        let sensors = parse_sensor_config(SENSORS_TOML).unwrap();

        let polled = init_all(&sensors, &buses, &Registry::with_builtin()).unwrap();
        let ids: Vec<_> = polled.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["hum0", "hum1", "imu0", "light0"]);
        assert_eq!(polled[3].interval.as_millis(), 200);
    }
}
