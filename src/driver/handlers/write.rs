//! Write handlers: accept actuation values and echo them back asynchronously

use crate::driver::DriverError;
use simple_device_shared::{now_ns, AsyncValues, CommandRequest, CommandValue};

/// Handle a write to the SmallInt resource
///
/// The written value is stamped with the request's resource name and
/// returned as async values for the host.
pub fn write_small_int(
    device_name: &str,
    req: &CommandRequest,
    param: &CommandValue,
) -> Result<AsyncValues, DriverError> {
    let val = param.int8_value()?;
    let result = CommandValue::new_int8(&req.device_resource_name, now_ns(), i64::from(val))?;

    Ok(AsyncValues::new(device_name, vec![result]))
}
