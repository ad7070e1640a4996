use crate::errors::HalResult;
use crate::hal::{LightDriver, Rgbw, SensorDriver, SensorFamily};
use crate::registry::{DriverFactory, DriverImpl};

/// Light sensor under steady office lighting. Has no UV channel.
pub struct VirtualLight {
    lux: f32,
    rgbw: Rgbw,
}

impl VirtualLight {
    pub const NAME: &'static str = "virtual_light";

    pub fn new() -> Self {
        Self {
            lux: 320.0,
            rgbw: Rgbw {
                r: 110.0,
                g: 130.0,
                b: 80.0,
                w: 320.0,
            },
        }
    }
}

impl Default for VirtualLight {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> SensorDriver<B> for VirtualLight {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn family(&self) -> SensorFamily {
        SensorFamily::Light
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

impl<B> LightDriver<B> for VirtualLight {
    fn acquire_light(&mut self, _bus: &mut B) -> HalResult<f32> {
        Ok(self.lux)
    }

    fn acquire_rgbw(&mut self, _bus: &mut B) -> HalResult<Rgbw> {
        Ok(self.rgbw)
    }
}

pub static VIRTUAL_LIGHT_FACTORY: VirtualLightFactory = VirtualLightFactory;

pub struct VirtualLightFactory;

impl DriverFactory for VirtualLightFactory {
    fn name(&self) -> &'static str {
        VirtualLight::NAME
    }

    fn family(&self) -> SensorFamily {
        SensorFamily::Light
    }

    fn create(&self) -> DriverImpl {
        DriverImpl::Light(Box::new(VirtualLight::new()))
    }
}
