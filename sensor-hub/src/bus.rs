pub mod i2c;

use std::sync::{Arc, Mutex};

use i2c::I2cBus;

/// I2C bus shared between every sensor instance created on it
pub type SharedI2cBus = Arc<Mutex<I2cBus>>;

/// Bus type enum for the transports a sensor can sit on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusType {
    I2C,
    Virtual,
}

impl BusType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i2c" => Some(BusType::I2C),
            "virtual" => Some(BusType::Virtual),
            _ => None,
        }
    }
}

/// Bus handle handed to the HAL at create time.
///
/// The HAL never opens or closes the underlying transport; it only keeps the
/// handle and passes it to the driver on every call.
#[derive(Clone, Debug)]
pub enum BusHandle {
    /// No transport; used by virtual drivers.
    Virtual,
    I2c(SharedI2cBus),
}

impl BusHandle {
    pub fn bus_type(&self) -> BusType {
        match self {
            BusHandle::Virtual => BusType::Virtual,
            BusHandle::I2c(_) => BusType::I2C,
        }
    }
}
