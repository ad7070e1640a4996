use super::data::{DataGroup, Rgbw, SensorData, Uv};
use super::driver::SensorDriver;
use super::instance::SensorInstance;
use super::{impl_sensor_hal, record};
use crate::errors::{HalError, HalResult};

/// Illuminance, color and ultraviolet.
pub const LIGHT_QUANTITIES: usize = 3;

/// Capability contract of light sensors.
///
/// Many chips only measure illuminance, so the color and UV slots default to
/// `NotSupported`.
pub trait LightDriver<B>: SensorDriver<B> {
    /// Illuminance in lux.
    fn acquire_light(&mut self, bus: &mut B) -> HalResult<f32>;

    fn acquire_rgbw(&mut self, _bus: &mut B) -> HalResult<Rgbw> {
        Err(HalError::not_supported(format!("rgbw on {}", self.name())))
    }

    fn acquire_uv(&mut self, _bus: &mut B) -> HalResult<Uv> {
        Err(HalError::not_supported(format!("uv on {}", self.name())))
    }
}

impl<B, T: LightDriver<B> + ?Sized> LightDriver<B> for &mut T {
    fn acquire_light(&mut self, bus: &mut B) -> HalResult<f32> {
        (**self).acquire_light(bus)
    }

    fn acquire_rgbw(&mut self, bus: &mut B) -> HalResult<Rgbw> {
        (**self).acquire_rgbw(bus)
    }

    fn acquire_uv(&mut self, bus: &mut B) -> HalResult<Uv> {
        (**self).acquire_uv(bus)
    }
}

/// Light sensor instance.
pub type Light<'d, B> = SensorInstance<B, dyn LightDriver<B> + 'd>;

impl<'d, B> SensorInstance<B, dyn LightDriver<B> + 'd> {
    pub fn acquire_light(&mut self) -> HalResult<f32> {
        let (driver, bus) = self.parts();
        driver.acquire_light(bus)
    }

    pub fn acquire_rgbw(&mut self) -> HalResult<Rgbw> {
        let (driver, bus) = self.parts();
        driver.acquire_rgbw(bus)
    }

    pub fn acquire_uv(&mut self) -> HalResult<Uv> {
        let (driver, bus) = self.parts();
        driver.acquire_uv(bus)
    }

    /// Read illuminance, color and UV, in that order, into `group`.
    pub fn acquire(&mut self, group: &mut DataGroup) -> HalResult<()> {
        group.clear();
        let (driver, bus) = self.parts();

        let light = driver.acquire_light(bus).map(SensorData::Light);
        record::<B, _>(group, &*driver, "light", light);

        let rgbw = driver.acquire_rgbw(bus).map(SensorData::Rgbw);
        record::<B, _>(group, &*driver, "rgbw", rgbw);

        let uv = driver.acquire_uv(bus).map(SensorData::Uv);
        record::<B, _>(group, &*driver, "uv", uv);

        Ok(())
    }
}

impl_sensor_hal!(LightDriver, Light);
