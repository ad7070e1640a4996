use serde::{Deserialize, Serialize};

use crate::hal::{DataGroup, SensorData, SensorEvent, SensorFamily};

/// Readings of one aggregate acquisition, stamped for hand-off to consumers.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SensorSample {
    /// Sensor id from the configuration (e.g., "hum0", "imu0")
    pub sensor_id: String,
    /// Registered driver name
    pub driver: String,
    pub family: SensorFamily,
    /// Sequence number for message ordering
    pub seq: u64,
    /// UTC timestamp in nanoseconds
    pub t_utc_ns: u64,
    pub readings: Vec<SensorData>,
}

impl SensorSample {
    /// Create a sample from the populated entries of `group`, stamped now
    pub fn new(sensor_id: &str, driver: &str, family: SensorFamily, seq: u64, group: &DataGroup) -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let t_utc_ns = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;

        Self {
            sensor_id: sensor_id.to_string(),
            driver: driver.to_string(),
            family,
            seq,
            t_utc_ns,
            readings: group.as_slice().to_vec(),
        }
    }

    /// First reading carrying `event`, if any
    pub fn reading(&self, event: SensorEvent) -> Option<&SensorData> {
        self.readings.iter().find(|r| r.event() == event)
    }

    /// Serialize to JSON for logging
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
