use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{HalError, HalResult};

/// Class of sensors sharing one capability contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorFamily {
    Humiture,
    Imu,
    Light,
}

impl SensorFamily {
    /// Number of distinct quantities one aggregate acquisition can produce.
    pub const fn max_quantities(self) -> usize {
        match self {
            SensorFamily::Humiture => super::humiture::HUMITURE_QUANTITIES,
            SensorFamily::Imu => super::imu::IMU_QUANTITIES,
            SensorFamily::Light => super::light::LIGHT_QUANTITIES,
        }
    }
}

impl fmt::Display for SensorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorFamily::Humiture => write!(f, "humiture"),
            SensorFamily::Imu => write!(f, "imu"),
            SensorFamily::Light => write!(f, "light"),
        }
    }
}

/// Lifecycle slots every chip driver provides, whatever its family.
///
/// The bus handle is owned by the [`SensorInstance`](super::SensorInstance)
/// and lent to the driver on every call.
pub trait SensorDriver<B>: Send {
    fn name(&self) -> &str;
    fn family(&self) -> SensorFamily;

    fn init(&mut self, bus: &mut B) -> HalResult<()>;
    fn deinit(&mut self, bus: &mut B) -> HalResult<()>;
    fn test(&mut self, bus: &mut B) -> HalResult<()>;

    fn sleep(&mut self, _bus: &mut B) -> HalResult<()> {
        Err(HalError::not_supported(format!("sleep on {}", self.name())))
    }

    fn wakeup(&mut self, _bus: &mut B) -> HalResult<()> {
        Err(HalError::not_supported(format!("wakeup on {}", self.name())))
    }
}

// Lets a caller keep ownership of a driver and hand the HAL a borrow.
impl<B, T: SensorDriver<B> + ?Sized> SensorDriver<B> for &mut T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn family(&self) -> SensorFamily {
        (**self).family()
    }

    fn init(&mut self, bus: &mut B) -> HalResult<()> {
        (**self).init(bus)
    }

    fn deinit(&mut self, bus: &mut B) -> HalResult<()> {
        (**self).deinit(bus)
    }

    fn test(&mut self, bus: &mut B) -> HalResult<()> {
        (**self).test(bus)
    }

    fn sleep(&mut self, bus: &mut B) -> HalResult<()> {
        (**self).sleep(bus)
    }

    fn wakeup(&mut self, bus: &mut B) -> HalResult<()> {
        (**self).wakeup(bus)
    }
}
