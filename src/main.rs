use simple_device::driver::handlers::Resource;
use simple_device::imaging::get_image_bytes;
use simple_device::{AsyncBridge, ProtocolDriver, ServiceConfig, SimpleDriver};
use simple_device_shared::{AsyncValues, CommandRequest, CommandValue, ValueType};
use tokio::sync::mpsc;

use tracing::{debug, error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = ServiceConfig::default();

    info!("Device service starting: {}", config.device_name);
    info!("  Read interval: {:?}", config.read_interval);

    if let Some(path) = &config.image_path {
        match get_image_bytes(path) {
            Ok(bytes) => info!("Loaded image {} ({} bytes)", path.display(), bytes.len()),
            Err(e) => warn!("Failed to load image {}: {}", path.display(), e),
        }
    }

    let (bridge, async_rx) = AsyncBridge::channel(config.async_buffer_size);
    let logger = tracing::dispatcher::get_default(|d| d.clone());

    let mut driver = SimpleDriver::new();
    driver.initialize(logger, bridge)?;
    info!("Driver initialized");

    // Spawn async values intake
    tokio::spawn(async move {
        handle_async_values(async_rx).await;
    });

    let big_int = [CommandRequest::new(Resource::BigInt.name(), ValueType::Int32)];
    let small_int = [CommandRequest::new(Resource::SmallInt.name(), ValueType::Int8)];
    let mut ticker = tokio::time::interval(config.read_interval);

    // Main read/write loop
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let mut last_small = None;
                for reqs in [&big_int, &small_int] {
                    match driver.handle_read_commands(&config.device_name, &config.protocols, reqs).await {
                        Ok(values) => {
                            for cv in values.into_iter().flatten() {
                                info!("[READ] {}", cv);
                                if cv.value_type() == ValueType::Int8 {
                                    last_small = Some(cv);
                                }
                            }
                        }
                        Err(e) => error!("Read failed: {}", e),
                    }
                }

                // Echo the latest SmallInt reading back as an actuation
                if let Some(cv) = last_small {
                    if let Err(e) = write_back(&driver, &config, &small_int, cv).await {
                        error!("Write failed: {}", e);
                    }
                }
            }

            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown requested");
                break;
            }
        }
    }

    driver.stop(false)?;
    info!("Device service stopped");
    Ok(())
}

async fn write_back(
    driver: &SimpleDriver,
    config: &ServiceConfig,
    reqs: &[CommandRequest],
    param: CommandValue,
) -> anyhow::Result<()> {
    debug!("[WRITE] {}", param);
    driver
        .handle_write_commands(&config.device_name, &config.protocols, reqs, &[param])
        .await?;
    Ok(())
}

/// Drain values the driver pushes outside of read cycles
async fn handle_async_values(mut async_rx: mpsc::Receiver<AsyncValues>) {
    while let Some(values) = async_rx.recv().await {
        for cv in &values.command_values {
            info!("[ASYNC] {} -> {}", values.device_name, cv);
        }
    }
    warn!("[ASYNC] Async values channel closed");
}
