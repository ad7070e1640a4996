use super::data::{Axis3, DataGroup, SensorData};
use super::driver::SensorDriver;
use super::instance::SensorInstance;
use super::{impl_sensor_hal, record};
use crate::errors::HalResult;

/// Gyroscope and accelerometer.
pub const IMU_QUANTITIES: usize = 2;

/// Capability contract of inertial measurement units.
pub trait ImuDriver<B>: SensorDriver<B> {
    /// Acceleration in g.
    fn acquire_acce(&mut self, bus: &mut B) -> HalResult<Axis3>;
    /// Angular rate in dps.
    fn acquire_gyro(&mut self, bus: &mut B) -> HalResult<Axis3>;
}

impl<B, T: ImuDriver<B> + ?Sized> ImuDriver<B> for &mut T {
    fn acquire_acce(&mut self, bus: &mut B) -> HalResult<Axis3> {
        (**self).acquire_acce(bus)
    }

    fn acquire_gyro(&mut self, bus: &mut B) -> HalResult<Axis3> {
        (**self).acquire_gyro(bus)
    }
}

/// IMU sensor instance.
pub type Imu<'d, B> = SensorInstance<B, dyn ImuDriver<B> + 'd>;

impl<'d, B> SensorInstance<B, dyn ImuDriver<B> + 'd> {
    pub fn acquire_acce(&mut self) -> HalResult<Axis3> {
        let (driver, bus) = self.parts();
        driver.acquire_acce(bus)
    }

    pub fn acquire_gyro(&mut self) -> HalResult<Axis3> {
        let (driver, bus) = self.parts();
        driver.acquire_gyro(bus)
    }

    /// Read the gyroscope, then the accelerometer, into `group`.
    pub fn acquire(&mut self, group: &mut DataGroup) -> HalResult<()> {
        group.clear();
        let (driver, bus) = self.parts();

        let gyro = driver.acquire_gyro(bus).map(SensorData::Gyro);
        record::<B, _>(group, &*driver, "gyro", gyro);

        let acce = driver.acquire_acce(bus).map(SensorData::Acce);
        record::<B, _>(group, &*driver, "acce", acce);

        Ok(())
    }
}

impl_sensor_hal!(ImuDriver, Imu);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::testing::{imu, StubDriver};
    use crate::hal::{SensorEvent, SensorFamily, SensorHal};

    #[test]
    fn test_acquire_gyro_before_acce() {
        let mut stub = StubDriver::new("stub_imu");
        let mut sensor = imu(&mut stub).unwrap();

        let mut group = DataGroup::new();
        assert_eq!(sensor.acquire(&mut group), Ok(()));
        assert_eq!(group.len(), 2);
        assert_eq!(group.get(0), Some(&SensorData::Gyro(Axis3::new(0.5, -0.5, 0.0))));
        assert_eq!(group.get(1), Some(&SensorData::Acce(Axis3::new(0.0, 0.0, 1.0))));
        drop(sensor);

        assert_eq!(stub.calls, ["init", "gyro", "acce"]);
    }

    #[test]
    fn test_acquire_skips_failed_gyro() {
        let mut stub = StubDriver::new("stub_imu");
        stub.gyro = Err(StubDriver::failing("gyro"));
        let mut sensor = imu(&mut stub).unwrap();

        let mut group = DataGroup::new();
        sensor.acquire(&mut group).unwrap();
        assert_eq!(group.len(), 1);
        assert_eq!(group.get(0).map(SensorData::event), Some(SensorEvent::AcceDataReady));
    }

    #[test]
    fn test_reused_group_reflects_latest_cycle() {
        let mut stub = StubDriver::new("stub_imu");
        let mut group = DataGroup::new();
        {
            let mut sensor = imu(&mut stub).unwrap();
            sensor.acquire(&mut group).unwrap();
            assert_eq!(group.len(), 2);
        }

        stub.acce = Err(StubDriver::failing("acce"));
        let mut sensor = imu(&mut stub).unwrap();
        sensor.acquire(&mut group).unwrap();
        assert_eq!(group.len(), 1);
        assert_eq!(group.get(0).map(SensorData::event), Some(SensorEvent::GyroDataReady));
        assert_eq!(sensor.family(), SensorFamily::Imu);
    }

    #[test]
    fn test_single_axis_reads() {
        let mut stub = StubDriver::new("stub_imu");
        let mut sensor = imu(&mut stub).unwrap();
        assert_eq!(sensor.acquire_acce(), Ok(Axis3::new(0.0, 0.0, 1.0)));
        assert_eq!(sensor.acquire_gyro(), Ok(Axis3::new(0.5, -0.5, 0.0)));
    }

    #[test]
    fn test_hal_family_follows_binding() {
        let mut stub = StubDriver::new("mislabelled");
        stub.family = SensorFamily::Light;
        let driver: Box<dyn ImuDriver<()> + '_> = Box::new(&mut stub);
        let sensor = Imu::create((), Some(driver)).unwrap();

        let hal: &dyn SensorHal = &sensor;
        assert_eq!(hal.family(), SensorFamily::Imu);
    }
}
