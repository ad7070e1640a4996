#[cfg(all(target_os = "linux", feature = "linux-i2c"))]
use i2cdev::linux::{LinuxI2CDevice, LinuxI2CError};

/// I2C bus error type - platform specific
#[cfg(all(target_os = "linux", feature = "linux-i2c"))]
pub type I2CError = LinuxI2CError;

#[cfg(not(all(target_os = "linux", feature = "linux-i2c")))]
#[derive(Debug)]
pub struct I2CError(String);

#[cfg(not(all(target_os = "linux", feature = "linux-i2c")))]
impl std::fmt::Display for I2CError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "I2C not supported on this platform: {}", self.0)
    }
}

#[cfg(not(all(target_os = "linux", feature = "linux-i2c")))]
impl std::error::Error for I2CError {}

/// Opened I2C adapter (e.g. `/dev/i2c-1`), held open for the sensors on it.
#[cfg(all(target_os = "linux", feature = "linux-i2c"))]
pub struct I2cBus {
    _device: LinuxI2CDevice,
    path: String,
}

#[cfg(not(all(target_os = "linux", feature = "linux-i2c")))]
pub struct I2cBus {
    path: String,
}

impl std::fmt::Debug for I2cBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I2cBus").field("path", &self.path).finish()
    }
}

#[cfg(all(target_os = "linux", feature = "linux-i2c"))]
impl I2cBus {
    pub fn new(path: &str) -> Result<Self, I2CError> {
        let device = LinuxI2CDevice::new(path, 0)?;
        Ok(Self {
            _device: device,
            path: path.to_string(),
        })
    }
}

#[cfg(not(all(target_os = "linux", feature = "linux-i2c")))]
impl I2cBus {
    pub fn new(path: &str) -> Result<Self, I2CError> {
        Err(I2CError(format!(
            "cannot open '{}': I2C is only supported on Linux with the linux-i2c feature",
            path
        )))
    }
}
