// Public modules
pub mod bus;
pub mod config;
pub mod drivers;
pub mod errors;
pub mod hal;
pub mod messages;
pub mod registry;
pub mod scheduler;

// Re-export commonly used types
pub use bus::BusHandle;
pub use config::{load_bus_config, load_sensor_config, BusConfig, SensorConfig};
pub use errors::{ConfigError, HalError, HalResult, RegistryError};
pub use hal::{DataGroup, Humiture, Imu, Light, SensorData, SensorFamily, SensorHal};
pub use messages::SensorSample;
pub use registry::{init_all, Registry};
pub use scheduler::{spawn_polling_tasks, PolledSensor};

use tokio::sync::{mpsc, watch};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Capacity of the sample channel between polling tasks and the hub loop
const SAMPLE_CHANNEL_CAPACITY: usize = 64;

/// Initialize tracing with default configuration
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();
}

/// Run the sensor hub with the given configuration directory until Ctrl-C
pub async fn run_sensor_hub(config_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    info!("[SensorHub] starting up...");

    // Load configuration
    let sensor_config = load_sensor_config(&format!("{}/sensors.toml", config_path))?;
    let bus_config = load_bus_config(&format!("{}/buses.toml", config_path))?;
    info!(
        "[config] loaded {} sensor(s) on {} bus(es)",
        sensor_config.sensors.len(),
        bus_config.buses.len()
    );

    let registry = Registry::with_builtin();
    info!("[registry] drivers available: {:?}", registry.names());

    let sensors = init_all(&sensor_config, &bus_config, &registry)?;
    info!("[registry] {} sensor(s) initialized", sensors.len());

    let (tx, mut rx) = mpsc::channel::<SensorSample>(SAMPLE_CHANNEL_CAPACITY);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let handles = spawn_polling_tasks(sensors, tx, shutdown_rx);
    info!("[main] sensor tasks launched");

    loop {
        tokio::select! {
            sample = rx.recv() => match sample {
                Some(sample) => match sample.to_json() {
                    Ok(json) => info!("[{}] {}", sample.sensor_id, json),
                    Err(e) => error!("[{}] failed to encode sample: {}", sample.sensor_id, e),
                },
                None => {
                    info!("[main] all sensor tasks finished");
                    break;
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!("[main] shutdown requested");
                break;
            }
        }
    }

    // Receivers may already be gone if every task exited on its own
    let _ = shutdown_tx.send(true);
    drop(rx);
    for handle in handles {
        if let Err(e) = handle.await {
            error!("[main] sensor task panicked: {}", e);
        }
    }

    info!("[SensorHub] stopped");
    Ok(())
}
