//! Built-in drivers.
//!
//! Virtual drivers talk to no hardware; they back the demo board and let the
//! hub be exercised on any host.

#[cfg(feature = "virtual_sensors")]
pub mod virtual_humiture;
#[cfg(feature = "virtual_sensors")]
pub mod virtual_imu;
#[cfg(feature = "virtual_sensors")]
pub mod virtual_light;

#[cfg(feature = "virtual_sensors")]
pub use self::virtual_humiture::{VIRTUAL_HTS221_FACTORY, VIRTUAL_SHT3X_FACTORY};
#[cfg(feature = "virtual_sensors")]
pub use self::virtual_imu::VIRTUAL_IMU_FACTORY;
#[cfg(feature = "virtual_sensors")]
pub use self::virtual_light::VIRTUAL_LIGHT_FACTORY;
