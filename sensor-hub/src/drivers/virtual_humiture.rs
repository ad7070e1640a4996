use rand::Rng;

use crate::errors::HalResult;
use crate::hal::{HumitureDriver, SensorDriver, SensorFamily};
use crate::registry::{DriverFactory, DriverImpl};

enum Readings {
    /// Uniformly random values in `0.0..100.0`.
    Random,
    Fixed { temperature: f32, humidity: f32 },
}

/// Humidity/temperature sensor without hardware behind it.
pub struct VirtualHumiture {
    name: &'static str,
    readings: Readings,
}

impl VirtualHumiture {
    /// Random readings, like an SHT3x in a very unstable room.
    pub fn sht3x() -> Self {
        Self {
            name: "virtual_sht3x",
            readings: Readings::Random,
        }
    }

    /// Fixed readings: 33.0 °C and 22.0 %.
    pub fn hts221() -> Self {
        Self {
            name: "virtual_hts221",
            readings: Readings::Fixed {
                temperature: 33.0,
                humidity: 22.0,
            },
        }
    }

    fn random_percent() -> f32 {
        rand::thread_rng().gen_range(0.0..100.0)
    }
}

impl<B> SensorDriver<B> for VirtualHumiture {
    fn name(&self) -> &str {
        self.name
    }

    fn family(&self) -> SensorFamily {
        SensorFamily::Humiture
    }

    fn init(&mut self, _bus: &mut B) -> HalResult<()> {
        Ok(())
    }

    fn deinit(&mut self, _bus: &mut B) -> HalResult<()> {
        Ok(())
    }

    fn test(&mut self, _bus: &mut B) -> HalResult<()> {
        Ok(())
    }
}

impl<B> HumitureDriver<B> for VirtualHumiture {
    fn acquire_temperature(&mut self, _bus: &mut B) -> HalResult<f32> {
        match self.readings {
            Readings::Random => Ok(Self::random_percent()),
            Readings::Fixed { temperature, .. } => Ok(temperature),
        }
    }

    fn acquire_humidity(&mut self, _bus: &mut B) -> HalResult<f32> {
        match self.readings {
            Readings::Random => Ok(Self::random_percent()),
            Readings::Fixed { humidity, .. } => Ok(humidity),
        }
    }
}

pub static VIRTUAL_SHT3X_FACTORY: VirtualSht3xFactory = VirtualSht3xFactory;

pub struct VirtualSht3xFactory;

impl DriverFactory for VirtualSht3xFactory {
    fn name(&self) -> &'static str {
        "virtual_sht3x"
    }

    fn family(&self) -> SensorFamily {
        SensorFamily::Humiture
    }

    fn create(&self) -> DriverImpl {
        DriverImpl::Humiture(Box::new(VirtualHumiture::sht3x()))
    }
}

pub static VIRTUAL_HTS221_FACTORY: VirtualHts221Factory = VirtualHts221Factory;

pub struct VirtualHts221Factory;

impl DriverFactory for VirtualHts221Factory {
    fn name(&self) -> &'static str {
        "virtual_hts221"
    }

    fn family(&self) -> SensorFamily {
        SensorFamily::Humiture
    }

    fn create(&self) -> DriverImpl {
        DriverImpl::Humiture(Box::new(VirtualHumiture::hts221()))
    }
}
