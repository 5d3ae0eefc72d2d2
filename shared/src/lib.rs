//! Simple Device Shared Types
//!
//! This crate provides the value and request types exchanged between a
//! device-service host and its protocol drivers.

pub mod request;
pub mod value;

use std::time::{SystemTime, UNIX_EPOCH};

pub use request::{AsyncValues, CommandRequest, ProtocolProperties, Protocols};
pub use value::{CommandValue, Value, ValueError, ValueType};

/// Get current timestamp in nanoseconds since Unix epoch
pub fn now_ns() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as i64
}

/// Bounds used when mimicking readings from the device
pub mod limits {
    pub const MIN_INT8: i64 = i8::MIN as i64;
    pub const MAX_INT8: i64 = i8::MAX as i64;

    pub const MIN_INT32: i64 = i32::MIN as i64;
    pub const MAX_INT32: i64 = i32::MAX as i64;
}
