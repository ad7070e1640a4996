use std::fmt;

use tracing::{debug, error};

use super::command::{Command, PowerMode};
use super::driver::{SensorDriver, SensorFamily};
use crate::errors::{HalError, HalResult};

/// A live sensor: a bus handle, an initialized flag and the bound driver.
///
/// Created only through [`create`](Self::create) and destroyed through
/// [`delete`](Self::delete). The instance is neither `Clone`
/// nor `Copy`; the caller holds the one handle.
pub struct SensorInstance<B, D: ?Sized> {
    bus: B,
    initialized: bool,
    driver: Box<D>,
}

impl<B, D: SensorDriver<B> + ?Sized> SensorInstance<B, D> {
    /// Bind `driver` to `bus` and run the driver's `init`.
    ///
    /// A missing driver is `InvalidArgument` and nothing is initialized. When
    /// `init` fails its error is returned and no instance is handed out.
    pub fn create(mut bus: B, driver: Option<Box<D>>) -> HalResult<Self> {
        let Some(mut driver) = driver else {
            error!("no driver found, sensor not created");
            return Err(HalError::InvalidArgument("driver implementation is missing"));
        };

        if let Err(e) = driver.init(&mut bus) {
            error!("[{}] {} sensor init failed: {}", driver.name(), driver.family(), e);
            return Err(e);
        }

        debug!("[{}] {} sensor created", driver.name(), driver.family());
        Ok(Self {
            bus,
            initialized: true,
            driver,
        })
    }

    /// Delete the instance behind `handle`, setting it to `None` on success.
    ///
    /// When the driver's `deinit` fails the error is returned and `handle`
    /// is left untouched, so the caller may call `delete` again.
    pub fn delete(handle: &mut Option<Self>) -> HalResult<()> {
        let sensor = handle
            .as_mut()
            .ok_or(HalError::InvalidArgument("sensor handle can't be None"))?;
        sensor.release()?;
        *handle = None;
        Ok(())
    }

    /// De-initialize the driver once. The flag is cleared before `deinit`
    /// runs, so a failed release is not retried against the driver.
    pub fn release(&mut self) -> HalResult<()> {
        if !self.initialized {
            return Ok(());
        }

        self.initialized = false;
        if let Err(e) = self.driver.deinit(&mut self.bus) {
            error!("[{}] {} sensor de-init failed: {}", self.driver.name(), self.driver.family(), e);
            return Err(e);
        }

        debug!("[{}] {} sensor released", self.driver.name(), self.driver.family());
        Ok(())
    }

    pub fn name(&self) -> &str {
        self.driver.name()
    }

    pub fn family(&self) -> SensorFamily {
        self.driver.family()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn test(&mut self) -> HalResult<()> {
        if !self.initialized {
            return Err(HalError::fail(self.driver.name(), "sensor is not initialized"));
        }
        self.driver.test(&mut self.bus)
    }

    pub fn sleep(&mut self) -> HalResult<()> {
        self.driver.sleep(&mut self.bus)
    }

    pub fn wakeup(&mut self) -> HalResult<()> {
        self.driver.wakeup(&mut self.bus)
    }

    pub fn set_power(&mut self, mode: PowerMode) -> HalResult<()> {
        match mode {
            PowerMode::Wakeup => self.wakeup(),
            PowerMode::Sleep => self.sleep(),
        }
    }

    /// Uniform command entry point shared by every family.
    ///
    /// Mode, range and output data rate are not configurable at this layer
    /// and always report `NotSupported`.
    pub fn control(&mut self, command: Command) -> HalResult<()> {
        match command {
            Command::SetMode(_) | Command::SetRange(_) | Command::SetOdr(_) => Err(
                HalError::not_supported(format!("{} on {}", command, self.driver.name())),
            ),
            Command::SetPower(mode) => self.set_power(mode),
            Command::SelfTest => self.test(),
        }
    }

    /// [`control`](Self::control) for a numeric command kind and argument.
    pub fn control_raw(&mut self, kind: u32, arg: u32) -> HalResult<()> {
        let command = Command::decode(kind, arg)?;
        self.control(command)
    }

    pub(super) fn parts(&mut self) -> (&mut D, &mut B) {
        (&mut *self.driver, &mut self.bus)
    }
}

impl<B, D: SensorDriver<B> + ?Sized> fmt::Debug for SensorInstance<B, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SensorInstance")
            .field("name", &self.driver.name())
            .field("family", &self.driver.family())
            .field("initialized", &self.initialized)
            .finish()
    }
}
