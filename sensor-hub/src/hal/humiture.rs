use super::data::{DataGroup, SensorData};
use super::driver::SensorDriver;
use super::instance::SensorInstance;
use super::{impl_sensor_hal, record};
use crate::errors::HalResult;

/// Temperature and humidity.
pub const HUMITURE_QUANTITIES: usize = 2;

/// Capability contract of humidity/temperature sensors.
pub trait HumitureDriver<B>: SensorDriver<B> {
    /// Temperature in °C.
    fn acquire_temperature(&mut self, bus: &mut B) -> HalResult<f32>;
    /// Relative humidity in %.
    fn acquire_humidity(&mut self, bus: &mut B) -> HalResult<f32>;
}

impl<B, T: HumitureDriver<B> + ?Sized> HumitureDriver<B> for &mut T {
    fn acquire_temperature(&mut self, bus: &mut B) -> HalResult<f32> {
        (**self).acquire_temperature(bus)
    }

    fn acquire_humidity(&mut self, bus: &mut B) -> HalResult<f32> {
        (**self).acquire_humidity(bus)
    }
}

/// Humiture sensor instance.
pub type Humiture<'d, B> = SensorInstance<B, dyn HumitureDriver<B> + 'd>;

impl<'d, B> SensorInstance<B, dyn HumitureDriver<B> + 'd> {
    pub fn acquire_temperature(&mut self) -> HalResult<f32> {
        let (driver, bus) = self.parts();
        driver.acquire_temperature(bus)
    }

    pub fn acquire_humidity(&mut self) -> HalResult<f32> {
        let (driver, bus) = self.parts();
        driver.acquire_humidity(bus)
    }

    /// Read temperature then humidity into `group`. Quantities that fail are
    /// left out; the call itself always succeeds.
    pub fn acquire(&mut self, group: &mut DataGroup) -> HalResult<()> {
        group.clear();
        let (driver, bus) = self.parts();

        let temperature = driver.acquire_temperature(bus).map(SensorData::Temperature);
        record::<B, _>(group, &*driver, "temperature", temperature);

        let humidity = driver.acquire_humidity(bus).map(SensorData::Humidity);
        record::<B, _>(group, &*driver, "humidity", humidity);

        Ok(())
    }
}

impl_sensor_hal!(HumitureDriver, Humiture);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::testing::{humiture, StubDriver};
    use crate::hal::{SensorEvent, SensorFamily, SensorHal};

    #[test]
    fn test_acquire_partial_success() {
        let mut stub = StubDriver::new("virtual_sht3x");
        stub.temperature = Ok(25.0);
        stub.humidity = Err(StubDriver::failing("humidity"));
        let mut sensor = humiture(&mut stub).unwrap();

        let mut group = DataGroup::new();
        assert_eq!(sensor.acquire(&mut group), Ok(()));
        assert_eq!(group.len(), 1);
        assert_eq!(group.get(0).map(SensorData::event), Some(SensorEvent::TempDataReady));
        assert_eq!(group.get(0), Some(&SensorData::Temperature(25.0)));
    }

    #[test]
    fn test_acquire_all_failing_is_still_ok() {
        let mut stub = StubDriver::new("stub");
        stub.temperature = Err(StubDriver::failing("temperature"));
        stub.humidity = Err(StubDriver::failing("humidity"));
        let mut sensor = humiture(&mut stub).unwrap();

        let mut group = DataGroup::new();
        group.push(SensorData::Light(1.0));
        assert_eq!(sensor.acquire(&mut group), Ok(()));
        assert!(group.is_empty());
    }

    #[test]
    fn test_acquire_order_and_count() {
        let mut stub = StubDriver::new("stub");
        let mut sensor = humiture(&mut stub).unwrap();

        let mut group = DataGroup::new();
        sensor.acquire(&mut group).unwrap();
        let events: Vec<_> = group.iter().map(SensorData::event).collect();
        assert_eq!(events, [SensorEvent::TempDataReady, SensorEvent::HumiDataReady]);
        assert!(group.len() <= SensorFamily::Humiture.max_quantities());
    }

    #[test]
    fn test_single_quantity_passthrough() {
        let mut stub = StubDriver::new("stub");
        stub.humidity = Err(StubDriver::failing("humidity"));
        let mut sensor = humiture(&mut stub).unwrap();

        assert_eq!(sensor.acquire_temperature(), Ok(25.0));
        assert_eq!(sensor.acquire_humidity(), Err(StubDriver::failing("humidity")));

        // no initialized check on single-quantity reads
        sensor.release().unwrap();
        assert_eq!(sensor.acquire_temperature(), Ok(25.0));
    }

    #[test]
    fn test_family_agnostic_view() {
        let mut stub = StubDriver::new("virtual_hts221");
        let sensor = humiture(&mut stub).unwrap();
        let mut hal: Box<dyn SensorHal + '_> = Box::new(sensor);

        assert_eq!(hal.name(), "virtual_hts221");
        assert_eq!(hal.family(), SensorFamily::Humiture);
        let mut group = DataGroup::new();
        hal.acquire(&mut group).unwrap();
        assert_eq!(group.len(), 2);
        assert!(hal.control_raw(crate::hal::Command::SET_RANGE, 1).unwrap_err().is_not_supported());
        assert_eq!(hal.release(), Ok(()));
        assert!(!hal.is_initialized());
    }
}
