use crate::errors::{HalError, HalResult};
use crate::hal::{Axis3, ImuDriver, SensorDriver, SensorFamily};
use crate::registry::{DriverFactory, DriverImpl};

/// IMU at rest: 1 g on Z, no rotation. Reads fail while asleep.
pub struct VirtualImu {
    awake: bool,
}

impl VirtualImu {
    pub const NAME: &'static str = "virtual_imu";

    pub fn new() -> Self {
        Self { awake: false }
    }

    fn ensure_awake(&self) -> HalResult<()> {
        if self.awake {
            Ok(())
        } else {
            Err(HalError::fail(Self::NAME, "sensor is asleep"))
        }
    }
}

impl Default for VirtualImu {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> SensorDriver<B> for VirtualImu {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn family(&self) -> SensorFamily {
        SensorFamily::Imu
    }

    fn init(&mut self, _bus: &mut B) -> HalResult<()> {
        self.awake = true;
        Ok(())
    }

    fn deinit(&mut self, _bus: &mut B) -> HalResult<()> {
        self.awake = false;
        Ok(())
    }

    fn test(&mut self, _bus: &mut B) -> HalResult<()> {
        self.ensure_awake()
    }

    fn sleep(&mut self, _bus: &mut B) -> HalResult<()> {
        self.awake = false;
        Ok(())
    }

    fn wakeup(&mut self, _bus: &mut B) -> HalResult<()> {
        self.awake = true;
        Ok(())
    }
}

impl<B> ImuDriver<B> for VirtualImu {
    fn acquire_acce(&mut self, _bus: &mut B) -> HalResult<Axis3> {
        self.ensure_awake()?;
        Ok(Axis3::new(0.0, 0.0, 1.0))
    }

    fn acquire_gyro(&mut self, _bus: &mut B) -> HalResult<Axis3> {
        self.ensure_awake()?;
        Ok(Axis3::default())
    }
}

pub static VIRTUAL_IMU_FACTORY: VirtualImuFactory = VirtualImuFactory;

pub struct VirtualImuFactory;

impl DriverFactory for VirtualImuFactory {
    fn name(&self) -> &'static str {
        VirtualImu::NAME
    }

    fn family(&self) -> SensorFamily {
        SensorFamily::Imu
    }

    fn create(&self) -> DriverImpl {
        DriverImpl::Imu(Box::new(VirtualImu::new()))
    }
}
