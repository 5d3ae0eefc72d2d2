//! Protocol driver for the simulated device
//!
//! This module handles:
//! - Binding the host's logger and async channel at initialization
//! - Dispatching read requests to per-resource handlers
//! - Accepting writes and echoing them through the async bridge
//! - Shutdown notification

mod error;
pub mod handlers;
pub mod sampler;
mod simple;

pub use error::DriverError;
pub use simple::SimpleDriver;

use async_trait::async_trait;
use simple_device_shared::{CommandRequest, CommandValue, Protocols};
use tracing::Dispatch;

use crate::telemetry::AsyncBridge;

/// Contract between a device-service host and a protocol driver
#[async_trait]
pub trait ProtocolDriver: Send + Sync {
    /// Bind the host's logging dispatcher and async values channel
    fn initialize(&mut self, logger: Dispatch, async_tx: AsyncBridge) -> Result<(), DriverError>;

    /// Read the resources named by `reqs` from the device
    ///
    /// Returns one slot per request; a slot is `None` when the driver has
    /// no value for that resource.
    async fn handle_read_commands(
        &self,
        device_name: &str,
        protocols: &Protocols,
        reqs: &[CommandRequest],
    ) -> Result<Vec<Option<CommandValue>>, DriverError>;

    /// Write `params` to the resources named by `reqs`
    async fn handle_write_commands(
        &self,
        device_name: &str,
        protocols: &Protocols,
        reqs: &[CommandRequest],
        params: &[CommandValue],
    ) -> Result<(), DriverError>;

    /// Shut down gracefully, or immediately if `force` is set
    fn stop(&mut self, force: bool) -> Result<(), DriverError>;
}
