use sensor_hub::{init_tracing, run_sensor_hub};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    init_tracing();

    // Get config path (board default or override)
    let config_path = sensor_hub_virtual_devkit::get_config_path();

    tracing::info!(
        "[{}] Configuration path: {}",
        sensor_hub_virtual_devkit::BOARD_NAME,
        config_path
    );

    // Run the sensor hub
    run_sensor_hub(&config_path).await
}
