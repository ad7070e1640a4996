use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum number of entries one data group can hold.
pub const DATA_GROUP_CAPACITY: usize = 6;

/// Three-axis reading (accelerometer in g, gyroscope in dps).
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axis3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Axis3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Color channels, in lux.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgbw {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub w: f32,
}

/// Ultraviolet channels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Uv {
    pub uv: f32,
    pub uva: f32,
    pub uvb: f32,
}

/// Event tag identifying which quantity a [`SensorData`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorEvent {
    AcceDataReady,
    GyroDataReady,
    TempDataReady,
    HumiDataReady,
    LightDataReady,
    RgbwDataReady,
    UvDataReady,
}

/// One tagged reading in a [`DataGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorData {
    /// Acceleration (g)
    Acce(Axis3),
    /// Angular rate (dps)
    Gyro(Axis3),
    /// Temperature (°C)
    Temperature(f32),
    /// Relative humidity (%)
    Humidity(f32),
    /// Illuminance (lux)
    Light(f32),
    Rgbw(Rgbw),
    Uv(Uv),
}

impl SensorData {
    pub fn event(&self) -> SensorEvent {
        match self {
            SensorData::Acce(_) => SensorEvent::AcceDataReady,
            SensorData::Gyro(_) => SensorEvent::GyroDataReady,
            SensorData::Temperature(_) => SensorEvent::TempDataReady,
            SensorData::Humidity(_) => SensorEvent::HumiDataReady,
            SensorData::Light(_) => SensorEvent::LightDataReady,
            SensorData::Rgbw(_) => SensorEvent::RgbwDataReady,
            SensorData::Uv(_) => SensorEvent::UvDataReady,
        }
    }
}

impl fmt::Display for SensorData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorData::Acce(a) => write!(f, "acce_x={:.2}, acce_y={:.2}, acce_z={:.2}", a.x, a.y, a.z),
            SensorData::Gyro(g) => write!(f, "gyro_x={:.2}, gyro_y={:.2}, gyro_z={:.2}", g.x, g.y, g.z),
            SensorData::Temperature(t) => write!(f, "temperature={:.2}", t),
            SensorData::Humidity(h) => write!(f, "humidity={:.2}", h),
            SensorData::Light(l) => write!(f, "light={:.2}", l),
            SensorData::Rgbw(c) => write!(f, "r={:.2}, g={:.2}, b={:.2}, w={:.2}", c.r, c.g, c.b, c.w),
            SensorData::Uv(u) => write!(f, "uv={:.2}, uva={:.2}, uvb={:.2}", u.uv, u.uva, u.uvb),
        }
    }
}

/// Fixed-capacity output buffer of one aggregate acquisition.
///
/// Allocated by the caller and reused across polling cycles. Only the first
/// [`len`](Self::len) entries are meaningful; the rest are left over from
/// earlier cycles and never exposed.
#[derive(Debug, Clone)]
pub struct DataGroup {
    entries: [SensorData; DATA_GROUP_CAPACITY],
    number: usize,
}

impl DataGroup {
    pub const fn new() -> Self {
        Self {
            entries: [SensorData::Temperature(0.0); DATA_GROUP_CAPACITY],
            number: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        DATA_GROUP_CAPACITY
    }

    /// Entries populated by the most recent acquisition.
    pub fn len(&self) -> usize {
        self.number
    }

    pub fn is_empty(&self) -> bool {
        self.number == 0
    }

    pub fn as_slice(&self) -> &[SensorData] {
        &self.entries[..self.number]
    }

    pub fn get(&self, index: usize) -> Option<&SensorData> {
        self.as_slice().get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SensorData> {
        self.as_slice().iter()
    }

    pub fn clear(&mut self) {
        self.number = 0;
    }

    /// Returns `false` and drops `data` when the group is full.
    pub(crate) fn push(&mut self, data: SensorData) -> bool {
        if self.number == DATA_GROUP_CAPACITY {
            return false;
        }
        self.entries[self.number] = data;
        self.number += 1;
        true
    }
}

impl Default for DataGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a DataGroup {
    type Item = &'a SensorData;
    type IntoIter = std::slice::Iter<'a, SensorData>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
