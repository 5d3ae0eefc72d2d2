//! Read handlers: mimic data collection from the device

use crate::driver::{sampler, DriverError};
use simple_device_shared::{limits, CommandRequest, CommandValue};

/// Handle a read of the BigInt resource
pub fn read_big_int(req: &CommandRequest, now: i64) -> Result<CommandValue, DriverError> {
    let sample = sampler::random_int(limits::MIN_INT32, limits::MAX_INT32)?;
    Ok(CommandValue::new_int32(&req.device_resource_name, now, sample)?)
}

/// Handle a read of the SmallInt resource
pub fn read_small_int(req: &CommandRequest, now: i64) -> Result<CommandValue, DriverError> {
    let sample = sampler::random_int(limits::MIN_INT8, limits::MAX_INT8)?;
    Ok(CommandValue::new_int8(&req.device_resource_name, now, sample)?)
}
