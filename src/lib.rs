//! Simple Device Driver
//!
//! A protocol driver that emulates a sensor/actuator device. Reads return
//! synthetic integer samples; writes are echoed back to the host through
//! its async values channel.

pub mod config;
pub mod driver;
pub mod imaging;
pub mod telemetry;

pub use config::ServiceConfig;
pub use driver::{DriverError, ProtocolDriver, SimpleDriver};
pub use telemetry::AsyncBridge;
