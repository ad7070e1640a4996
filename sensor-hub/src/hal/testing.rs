//! Stub driver shared by the HAL tests.

use super::data::{Axis3, Rgbw, Uv};
use super::driver::{SensorDriver, SensorFamily};
use super::{Humiture, HumitureDriver, Imu, ImuDriver, Light, LightDriver};
use crate::errors::{HalError, HalResult};

/// Driver whose every slot returns a preset outcome and records its call.
pub struct StubDriver {
    pub name: &'static str,
    pub family: SensorFamily,
    pub init: HalResult<()>,
    pub deinit: HalResult<()>,
    pub test: HalResult<()>,
    pub sleep: HalResult<()>,
    pub wakeup: HalResult<()>,
    pub temperature: HalResult<f32>,
    pub humidity: HalResult<f32>,
    pub acce: HalResult<Axis3>,
    pub gyro: HalResult<Axis3>,
    pub light: HalResult<f32>,
    pub rgbw: HalResult<Rgbw>,
    pub uv: HalResult<Uv>,
    pub calls: Vec<&'static str>,
}

impl StubDriver {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            family: SensorFamily::Humiture,
            init: Ok(()),
            deinit: Ok(()),
            test: Ok(()),
            sleep: Ok(()),
            wakeup: Ok(()),
            temperature: Ok(25.0),
            humidity: Ok(50.0),
            acce: Ok(Axis3::new(0.0, 0.0, 1.0)),
            gyro: Ok(Axis3::new(0.5, -0.5, 0.0)),
            light: Ok(320.0),
            rgbw: Ok(Rgbw { r: 10.0, g: 20.0, b: 30.0, w: 60.0 }),
            uv: Ok(Uv { uv: 1.0, uva: 0.6, uvb: 0.4 }),
            calls: Vec::new(),
        }
    }

    pub fn failing(what: &str) -> HalError {
        HalError::fail("stub", format!("{} read failed", what))
    }

    fn call<T: Clone>(&mut self, slot: &'static str, outcome: fn(&Self) -> &HalResult<T>) -> HalResult<T> {
        self.calls.push(slot);
        outcome(self).clone()
    }
}

impl<B> SensorDriver<B> for StubDriver {
    fn name(&self) -> &str {
        self.name
    }

    fn family(&self) -> SensorFamily {
        self.family
    }

    fn init(&mut self, _bus: &mut B) -> HalResult<()> {
        self.call("init", |s| &s.init)
    }

    fn deinit(&mut self, _bus: &mut B) -> HalResult<()> {
        self.call("deinit", |s| &s.deinit)
    }

    fn test(&mut self, _bus: &mut B) -> HalResult<()> {
        self.call("test", |s| &s.test)
    }

    fn sleep(&mut self, _bus: &mut B) -> HalResult<()> {
        self.call("sleep", |s| &s.sleep)
    }

    fn wakeup(&mut self, _bus: &mut B) -> HalResult<()> {
        self.call("wakeup", |s| &s.wakeup)
    }
}

impl<B> HumitureDriver<B> for StubDriver {
    fn acquire_temperature(&mut self, _bus: &mut B) -> HalResult<f32> {
        self.call("temperature", |s| &s.temperature)
    }

    fn acquire_humidity(&mut self, _bus: &mut B) -> HalResult<f32> {
        self.call("humidity", |s| &s.humidity)
    }
}

impl<B> ImuDriver<B> for StubDriver {
    fn acquire_acce(&mut self, _bus: &mut B) -> HalResult<Axis3> {
        self.call("acce", |s| &s.acce)
    }

    fn acquire_gyro(&mut self, _bus: &mut B) -> HalResult<Axis3> {
        self.call("gyro", |s| &s.gyro)
    }
}

impl<B> LightDriver<B> for StubDriver {
    fn acquire_light(&mut self, _bus: &mut B) -> HalResult<f32> {
        self.call("light", |s| &s.light)
    }

    fn acquire_rgbw(&mut self, _bus: &mut B) -> HalResult<Rgbw> {
        self.call("rgbw", |s| &s.rgbw)
    }

    fn acquire_uv(&mut self, _bus: &mut B) -> HalResult<Uv> {
        self.call("uv", |s| &s.uv)
    }
}

pub fn humiture(stub: &mut StubDriver) -> HalResult<Humiture<'_, ()>> {
    let driver: Box<dyn HumitureDriver<()> + '_> = Box::new(stub);
    Humiture::create((), Some(driver))
}

pub fn imu(stub: &mut StubDriver) -> HalResult<Imu<'_, ()>> {
    stub.family = SensorFamily::Imu;
    let driver: Box<dyn ImuDriver<()> + '_> = Box::new(stub);
    Imu::create((), Some(driver))
}

pub fn light(stub: &mut StubDriver) -> HalResult<Light<'_, ()>> {
    stub.family = SensorFamily::Light;
    let driver: Box<dyn LightDriver<()> + '_> = Box::new(stub);
    Light::create((), Some(driver))
}
