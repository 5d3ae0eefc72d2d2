//! Simple driver - validates and dispatches host commands

use async_trait::async_trait;
use simple_device_shared::{now_ns, CommandRequest, CommandValue, Protocols};
use tracing::{debug, dispatcher, Dispatch};

use super::handlers::{self, Resource};
use super::{DriverError, ProtocolDriver};
use crate::telemetry::AsyncBridge;

const READ_OP: &str = "handle_read_commands";
const WRITE_OP: &str = "handle_write_commands";

/// State bound by `initialize`, read-only until `stop`
struct DriverState {
    logger: Dispatch,
    async_tx: AsyncBridge,
}

/// Driver emulating a device with two integer resources
#[derive(Default)]
pub struct SimpleDriver {
    state: Option<DriverState>,
}

impl SimpleDriver {
    /// Create an uninitialized driver
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` under the host's logger; without one nothing is logged
    fn with_logger(&self, f: impl FnOnce()) {
        if let Some(state) = &self.state {
            dispatcher::with_default(&state.logger, f);
        }
    }
}

/// Take the only element of `items`, rejecting empty and multi-element batches
fn single<'a, T>(
    items: &'a [T],
    operation: &'static str,
    what: &'static str,
) -> Result<&'a T, DriverError> {
    match items {
        [one] => Ok(one),
        _ => Err(DriverError::UnsupportedBatch {
            operation,
            what,
            count: items.len(),
        }),
    }
}

#[async_trait]
impl ProtocolDriver for SimpleDriver {
    fn initialize(&mut self, logger: Dispatch, async_tx: AsyncBridge) -> Result<(), DriverError> {
        self.state = Some(DriverState { logger, async_tx });
        self.with_logger(|| debug!("SimpleDriver initialized"));
        Ok(())
    }

    async fn handle_read_commands(
        &self,
        device_name: &str,
        protocols: &Protocols,
        reqs: &[CommandRequest],
    ) -> Result<Vec<Option<CommandValue>>, DriverError> {
        let req = single(reqs, READ_OP, "command requests")?;

        self.with_logger(|| {
            debug!(
                device = device_name,
                ?protocols,
                resource = %req.device_resource_name,
                attributes = ?req.attributes,
                "Handling read command"
            )
        });

        let now = now_ns();
        let value = match Resource::from_name(&req.device_resource_name) {
            Some(Resource::BigInt) => Some(handlers::read_big_int(req, now)?),
            Some(Resource::SmallInt) => Some(handlers::read_small_int(req, now)?),
            // Unknown resources leave the slot empty rather than failing
            None => None,
        };

        Ok(vec![value])
    }

    async fn handle_write_commands(
        &self,
        device_name: &str,
        protocols: &Protocols,
        reqs: &[CommandRequest],
        params: &[CommandValue],
    ) -> Result<(), DriverError> {
        let req = single(reqs, WRITE_OP, "command requests")?;
        let param = single(params, WRITE_OP, "parameters")?;

        self.with_logger(|| {
            debug!(
                device = device_name,
                ?protocols,
                resource = %req.device_resource_name,
                parameter = %param,
                "Handling write command"
            )
        });

        match Resource::from_name(&param.device_resource_name) {
            Some(Resource::SmallInt) => {
                let values = handlers::write_small_int(device_name, req, param)?;
                let state = self.state.as_ref().ok_or(DriverError::NotInitialized)?;
                state.async_tx.deliver(values).await
            }
            // Writes to any other resource are accepted and ignored
            _ => Ok(()),
        }
    }

    fn stop(&mut self, force: bool) -> Result<(), DriverError> {
        // The logger may never have been bound
        self.with_logger(|| debug!(force, "SimpleDriver stop called"));
        self.state = None;
        Ok(())
    }
}
