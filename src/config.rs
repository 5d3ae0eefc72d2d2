//! Configuration for the demo device service

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use simple_device_shared::Protocols;

/// Settings the demo host uses to drive the simple driver
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Name of the simulated device
    pub device_name: String,
    /// Protocol properties passed through to the driver
    pub protocols: Protocols,
    /// Capacity of the async values channel
    pub async_buffer_size: usize,
    /// Interval between read cycles
    pub read_interval: Duration,
    /// Image loaded once at startup, if set
    pub image_path: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        let mut other = HashMap::new();
        other.insert("Address".to_string(), "simple01".to_string());
        other.insert("Port".to_string(), "300".to_string());

        let mut protocols = HashMap::new();
        protocols.insert("other".to_string(), other);

        Self {
            device_name: "Simple-Device01".into(),
            protocols,
            async_buffer_size: 16,
            read_interval: Duration::from_secs(2),
            image_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default();
        assert_eq!(config.device_name, "Simple-Device01");
        assert_eq!(config.protocols["other"]["Port"], "300");
        assert!(config.async_buffer_size > 0);
        assert!(config.image_path.is_none());
    }
}
