use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use crate::bus::i2c::I2cBus;
use crate::bus::{BusHandle, BusType};
use crate::config::{BusConfig, SensorConfig};
use crate::errors::{RegistryError, RegistryResult};
use crate::hal::{
    Humiture, HumitureDriver, Imu, ImuDriver, Light, LightDriver, SensorFamily, SensorHal,
};
use crate::scheduler::PolledSensor;

/// A freshly built driver, tagged with the family contract it implements.
pub enum DriverImpl {
    Humiture(Box<dyn HumitureDriver<BusHandle>>),
    Imu(Box<dyn ImuDriver<BusHandle>>),
    Light(Box<dyn LightDriver<BusHandle>>),
}

impl DriverImpl {
    pub fn family(&self) -> SensorFamily {
        match self {
            DriverImpl::Humiture(_) => SensorFamily::Humiture,
            DriverImpl::Imu(_) => SensorFamily::Imu,
            DriverImpl::Light(_) => SensorFamily::Light,
        }
    }
}

/// Builds driver implementations for one driver name.
pub trait DriverFactory: Sync {
    fn name(&self) -> &'static str;
    fn family(&self) -> SensorFamily;
    fn create(&self) -> DriverImpl;
}

#[cfg(feature = "virtual_sensors")]
use crate::drivers::{
    VIRTUAL_HTS221_FACTORY, VIRTUAL_IMU_FACTORY, VIRTUAL_LIGHT_FACTORY, VIRTUAL_SHT3X_FACTORY,
};

pub static BUILTIN_FACTORIES: &[&dyn DriverFactory] = &[
    #[cfg(feature = "virtual_sensors")]
    &VIRTUAL_SHT3X_FACTORY,
    #[cfg(feature = "virtual_sensors")]
    &VIRTUAL_HTS221_FACTORY,
    #[cfg(feature = "virtual_sensors")]
    &VIRTUAL_IMU_FACTORY,
    #[cfg(feature = "virtual_sensors")]
    &VIRTUAL_LIGHT_FACTORY,
];

/// Name to driver factory mapping, populated at startup.
#[derive(Default)]
pub struct Registry {
    factories: HashMap<&'static str, &'static dyn DriverFactory>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every driver compiled into this build.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for factory in BUILTIN_FACTORIES {
            // names in the static table are unique
            registry.factories.insert(factory.name(), *factory);
        }
        registry
    }

    pub fn register(&mut self, factory: &'static dyn DriverFactory) -> RegistryResult<()> {
        if self.factories.contains_key(factory.name()) {
            return Err(RegistryError::DuplicateDriver {
                driver: factory.name().to_string(),
            });
        }
        self.factories.insert(factory.name(), factory);
        Ok(())
    }

    pub fn lookup(&self, driver: &str) -> Option<&'static dyn DriverFactory> {
        self.factories.get(driver).copied()
    }

    /// Registered driver names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Resolve `driver` and create an instance of its family on `bus`.
    pub fn create_sensor(&self, driver: &str, bus: BusHandle) -> RegistryResult<Box<dyn SensorHal>> {
        let factory = self.lookup(driver).ok_or_else(|| RegistryError::UnknownDriver {
            driver: driver.to_string(),
        })?;

        let driver_impl = factory.create();
        if driver_impl.family() != factory.family() {
            return Err(RegistryError::FamilyMismatch {
                driver: driver.to_string(),
                declared: factory.family(),
                built: driver_impl.family(),
            });
        }

        let created: Result<Box<dyn SensorHal>, _> = match driver_impl {
            DriverImpl::Humiture(d) => Humiture::create(bus, Some(d)).map(|s| Box::new(s) as Box<dyn SensorHal>),
            DriverImpl::Imu(d) => Imu::create(bus, Some(d)).map(|s| Box::new(s) as Box<dyn SensorHal>),
            DriverImpl::Light(d) => Light::create(bus, Some(d)).map(|s| Box::new(s) as Box<dyn SensorHal>),
        };

        created.map_err(|source| RegistryError::SensorCreation {
            sensor: driver.to_string(),
            source,
        })
    }
}

fn open_buses(bus_config: &BusConfig) -> RegistryResult<HashMap<String, BusHandle>> {
    let mut bus_map = HashMap::new();
    for b in &bus_config.buses {
        let handle = match b.bus_type()? {
            BusType::Virtual => BusHandle::Virtual,
            BusType::I2C => {
                let path = b.path.as_deref().unwrap_or_default();
                let bus = I2cBus::new(path).map_err(|e| RegistryError::BusInitError {
                    bus: b.id.clone(),
                    reason: e.to_string(),
                })?;
                BusHandle::I2c(Arc::new(Mutex::new(bus)))
            }
        };
        info!("[registry] opened {:?} bus '{}'", handle.bus_type(), b.id);
        bus_map.insert(b.id.clone(), handle);
    }
    Ok(bus_map)
}

/// Open every configured bus and create every configured sensor.
///
/// On failure the sensors created so far are released before the error is
/// returned.
pub fn init_all(
    sensor_config: &SensorConfig,
    bus_config: &BusConfig,
    registry: &Registry,
) -> RegistryResult<Vec<PolledSensor>> {
    let bus_map = open_buses(bus_config)?;

    let mut sensors: Vec<PolledSensor> = Vec::new();
    info!("[registry] initializing {} sensors...", sensor_config.sensors.len());
    for s in &sensor_config.sensors {
        let created = bus_map
            .get(&s.bus)
            .cloned()
            .ok_or_else(|| RegistryError::BusNotFound { bus: s.bus.clone() })
            .and_then(|bus| registry.create_sensor(&s.driver, bus));

        match created {
            Ok(sensor) => {
                info!("[registry] registered sensor: id={} driver={} bus={}", s.id, s.driver, s.bus);
                sensors.push(PolledSensor {
                    id: s.id.clone(),
                    interval: s.poll_interval(),
                    sensor,
                });
            }
            Err(e) => {
                for mut polled in sensors {
                    if let Err(release_err) = polled.sensor.release() {
                        warn!("[{}] release after failed init: {}", polled.id, release_err);
                    }
                }
                return Err(e);
            }
        }
    }

    Ok(sensors)
}

#[cfg(all(test, feature = "virtual_sensors"))]
mod tests {
    use super::*;
    use crate::config::{parse_bus_config, parse_sensor_config};
    use crate::hal::DataGroup;

    const BUSES: &str = "[[bus]]\nid = \"sim\"\ntype = \"virtual\"\n";

    #[test]
    fn test_builtin_names() {
        let registry = Registry::with_builtin();
        assert_eq!(
            registry.names(),
            ["virtual_hts221", "virtual_imu", "virtual_light", "virtual_sht3x"]
        );
        assert_eq!(
            registry.lookup("virtual_imu").map(|f| f.family()),
            Some(SensorFamily::Imu)
        );
    }

    #[test]
    fn test_duplicate_registration() {
        let mut registry = Registry::with_builtin();
        let err = registry.register(&VIRTUAL_SHT3X_FACTORY).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateDriver { .. }));

        let mut empty = Registry::new();
        assert!(empty.register(&VIRTUAL_SHT3X_FACTORY).is_ok());
    }

    #[test]
    fn test_create_sensor_by_name() {
        let registry = Registry::with_builtin();
        let mut sensor = registry.create_sensor("virtual_hts221", BusHandle::Virtual).unwrap();
        assert_eq!(sensor.family(), SensorFamily::Humiture);

        let mut group = DataGroup::new();
        sensor.acquire(&mut group).unwrap();
        assert_eq!(group.len(), 2);

        let err = registry.create_sensor("bme280", BusHandle::Virtual).err().unwrap();
        assert!(matches!(err, RegistryError::UnknownDriver { .. }));
    }

    struct MislabelledFactory;

    impl DriverFactory for MislabelledFactory {
        fn name(&self) -> &'static str {
            "mislabelled"
        }

        fn family(&self) -> SensorFamily {
            SensorFamily::Imu
        }

        fn create(&self) -> DriverImpl {
            DriverImpl::Humiture(Box::new(crate::drivers::virtual_humiture::VirtualHumiture::hts221()))
        }
    }

    static MISLABELLED_FACTORY: MislabelledFactory = MislabelledFactory;

    #[test]
    fn test_family_mismatch_rejected() {
        let mut registry = Registry::new();
        registry.register(&MISLABELLED_FACTORY).unwrap();

        let err = registry.create_sensor("mislabelled", BusHandle::Virtual).err().unwrap();
        assert!(matches!(
            err,
            RegistryError::FamilyMismatch {
                declared: SensorFamily::Imu,
                built: SensorFamily::Humiture,
                ..
            }
        ));
    }

    #[test]
    fn test_init_all() {
        let sensors = parse_sensor_config(
            "[[sensor]]\nid = \"hum0\"\ndriver = \"virtual_sht3x\"\nbus = \"sim\"\n\n\
             [[sensor]]\nid = \"light0\"\ndriver = \"virtual_light\"\nbus = \"sim\"\nmin_delay_ms = 50\n",
        )
        .unwrap();
        let buses = parse_bus_config(BUSES).unwrap();

        let polled = init_all(&sensors, &buses, &Registry::with_builtin()).unwrap();
        assert_eq!(polled.len(), 2);
        assert_eq!(polled[1].id, "light0");
        assert_eq!(polled[1].interval.as_millis(), 50);
        assert_eq!(polled[1].sensor.family(), SensorFamily::Light);
    }

    #[test]
    fn test_init_all_unknown_bus() {
        let sensors =
            parse_sensor_config("[[sensor]]\nid = \"hum0\"\ndriver = \"virtual_sht3x\"\nbus = \"i2c9\"\n")
                .unwrap();
        let buses = parse_bus_config(BUSES).unwrap();

        let err = init_all(&sensors, &buses, &Registry::with_builtin()).err().unwrap();
        assert!(matches!(err, RegistryError::BusNotFound { .. }));
    }

    #[test]
    fn test_init_all_unopenable_i2c_bus() {
        let sensors =
            parse_sensor_config("[[sensor]]\nid = \"hum0\"\ndriver = \"virtual_sht3x\"\nbus = \"sim\"\n")
                .unwrap();
        let buses = parse_bus_config(
            "[[bus]]\nid = \"i2c9\"\ntype = \"i2c\"\npath = \"/dev/i2c-does-not-exist\"\n",
        )
        .unwrap();

        let err = init_all(&sensors, &buses, &Registry::with_builtin()).err().unwrap();
        assert!(matches!(err, RegistryError::BusInitError { ref bus, .. } if bus == "i2c9"));
    }
}
