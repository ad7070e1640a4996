//! Sensor family HAL.
//!
//! Every concrete chip driver implements [`SensorDriver`] plus the capability
//! trait of its family ([`HumitureDriver`], [`ImuDriver`] or [`LightDriver`]).
//! The HAL wraps a driver and a bus handle into a [`SensorInstance`] which
//! provides one lifecycle (create / delete), per-quantity acquisition, an
//! aggregate acquisition into a [`DataGroup`], and one command dispatcher.
//!
//! All calls are synchronous; an instance is owned by exactly one caller and
//! has no internal locking.

pub mod command;
pub mod data;
pub mod driver;
pub mod humiture;
pub mod imu;
pub mod instance;
pub mod light;

#[cfg(test)]
pub(crate) mod testing;

pub use command::{Command, OperatingMode, PowerMode, Range};
pub use data::{Axis3, DataGroup, Rgbw, SensorData, SensorEvent, Uv, DATA_GROUP_CAPACITY};
pub use driver::{SensorDriver, SensorFamily};
pub use humiture::{Humiture, HumitureDriver};
pub use imu::{Imu, ImuDriver};
pub use instance::SensorInstance;
pub use light::{Light, LightDriver};

use crate::errors::HalResult;
use tracing::trace;

/// Family-agnostic view of a sensor instance.
///
/// Orchestration code above the HAL (the polling scheduler, the registry)
/// holds `Box<dyn SensorHal>` and never needs to know the concrete family.
pub trait SensorHal: Send {
    fn name(&self) -> &str;
    fn family(&self) -> SensorFamily;
    fn is_initialized(&self) -> bool;

    /// Fill `group` with every quantity that could be read. Never fails on a
    /// per-quantity error; see [`DataGroup::len`].
    fn acquire(&mut self, group: &mut DataGroup) -> HalResult<()>;
    fn set_power(&mut self, mode: PowerMode) -> HalResult<()>;
    fn control(&mut self, command: Command) -> HalResult<()>;
    fn test(&mut self) -> HalResult<()>;

    /// De-initialize the driver, leaving the instance allocated but unusable.
    fn release(&mut self) -> HalResult<()>;

    /// Decode a numeric command kind and argument, then dispatch it.
    fn control_raw(&mut self, kind: u32, arg: u32) -> HalResult<()> {
        let command = Command::decode(kind, arg)?;
        self.control(command)
    }
}

/// Append `result` to `group` when it succeeded; failures are only traced.
fn record<B, D>(group: &mut DataGroup, driver: &D, quantity: &str, result: HalResult<SensorData>)
where
    D: SensorDriver<B> + ?Sized,
{
    match result {
        Ok(data) => {
            let pushed = group.push(data);
            debug_assert!(pushed, "family exceeds data group capacity");
        }
        Err(e) => trace!("[{}] {} skipped: {}", driver.name(), quantity, e),
    }
}

macro_rules! impl_sensor_hal {
    ($driver:ident, $family:ident) => {
        impl<'d, B: Send> $crate::hal::SensorHal for $crate::hal::SensorInstance<B, dyn $driver<B> + 'd> {
            fn name(&self) -> &str {
                $crate::hal::SensorInstance::name(self)
            }

            /// The family the instance was bound under, whatever the driver reports.
            fn family(&self) -> $crate::hal::SensorFamily {
                $crate::hal::SensorFamily::$family
            }

            fn is_initialized(&self) -> bool {
                $crate::hal::SensorInstance::is_initialized(self)
            }

            fn acquire(&mut self, group: &mut $crate::hal::DataGroup) -> $crate::errors::HalResult<()> {
                Self::acquire(self, group)
            }

            fn set_power(&mut self, mode: $crate::hal::PowerMode) -> $crate::errors::HalResult<()> {
                $crate::hal::SensorInstance::set_power(self, mode)
            }

            fn control(&mut self, command: $crate::hal::Command) -> $crate::errors::HalResult<()> {
                $crate::hal::SensorInstance::control(self, command)
            }

            fn test(&mut self) -> $crate::errors::HalResult<()> {
                $crate::hal::SensorInstance::test(self)
            }

            fn release(&mut self) -> $crate::errors::HalResult<()> {
                $crate::hal::SensorInstance::release(self)
            }
        }
    };
}

pub(crate) use impl_sensor_hal;
