//! Command requests issued by the host and async results handed back to it

use std::collections::HashMap;

use crate::value::{CommandValue, ValueType};

/// Connection properties of one protocol (opaque to drivers)
pub type ProtocolProperties = HashMap<String, String>;

/// Protocol properties keyed by protocol name
pub type Protocols = HashMap<String, ProtocolProperties>;

/// A read or write intent for a single device resource
#[derive(Debug, Clone, PartialEq)]
pub struct CommandRequest {
    /// Name of the targeted device resource
    pub device_resource_name: String,
    /// Protocol-specific attributes of the resource
    pub attributes: HashMap<String, String>,
    /// Declared type of the resource value
    pub value_type: ValueType,
}

impl CommandRequest {
    /// Create a request with no attributes
    pub fn new(device_resource_name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            device_resource_name: device_resource_name.into(),
            attributes: HashMap::new(),
            value_type,
        }
    }
}

/// Values pushed to the host outside of a read cycle
#[derive(Debug, Clone, PartialEq)]
pub struct AsyncValues {
    pub device_name: String,
    pub command_values: Vec<CommandValue>,
}

impl AsyncValues {
    pub fn new(device_name: impl Into<String>, command_values: Vec<CommandValue>) -> Self {
        Self {
            device_name: device_name.into(),
            command_values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let req = CommandRequest::new("SmallInt", ValueType::Int8);

        assert_eq!(req.device_resource_name, "SmallInt");
        assert_eq!(req.value_type, ValueType::Int8);
        assert!(req.attributes.is_empty());
    }

    #[test]
    fn test_async_values() {
        let cv = CommandValue::new_bool("Switch", 1, true);
        let values = AsyncValues::new("device-01", vec![cv.clone()]);
        assert_eq!(values.device_name, "device-01");
        assert_eq!(values.command_values, vec![cv]);
    }
}
