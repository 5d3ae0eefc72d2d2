//! Async telemetry bridge
//!
//! Hands values produced outside of a read cycle to the host's async
//! intake channel.

use simple_device_shared::AsyncValues;
use tokio::sync::mpsc;

use crate::driver::DriverError;

/// Sending half of the host-owned async values channel
#[derive(Debug, Clone)]
pub struct AsyncBridge {
    tx: mpsc::Sender<AsyncValues>,
}

impl AsyncBridge {
    /// Wrap a sender owned by the host
    pub fn new(tx: mpsc::Sender<AsyncValues>) -> Self {
        Self { tx }
    }

    /// Create a bridge together with the receiver the host drains
    pub fn channel(buffer: usize) -> (Self, mpsc::Receiver<AsyncValues>) {
        let (tx, rx) = mpsc::channel(buffer);
        (Self::new(tx), rx)
    }

    /// Push values to the host.
    ///
    /// Waits for capacity when the channel is full; there is no timeout.
    pub async fn deliver(&self, values: AsyncValues) -> Result<(), DriverError> {
        self.tx
            .send(values)
            .await
            .map_err(|_| DriverError::ChannelClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_device_shared::CommandValue;
    use std::time::Duration;

    fn sample_values(v: i64) -> AsyncValues {
        AsyncValues::new(
            "device-01",
            vec![CommandValue::new_int8("SmallInt", 1, v).unwrap()],
        )
    }

    #[tokio::test]
    async fn test_deliver_preserves_order() {
        let (bridge, mut rx) = AsyncBridge::channel(4);

        bridge.deliver(sample_values(1)).await.unwrap();
        bridge.deliver(sample_values(2)).await.unwrap();

        assert_eq!(rx.recv().await.unwrap(), sample_values(1));
        assert_eq!(rx.recv().await.unwrap(), sample_values(2));
    }

    #[tokio::test]
    async fn test_deliver_waits_for_capacity() {
        let (bridge, mut rx) = AsyncBridge::channel(1);
        bridge.deliver(sample_values(1)).await.unwrap();

        // Channel is full: the second send must not complete until drained
        let blocked =
            tokio::time::timeout(Duration::from_millis(50), bridge.deliver(sample_values(2))).await;
        assert!(blocked.is_err());

        assert_eq!(rx.recv().await.unwrap(), sample_values(1));
        bridge.deliver(sample_values(3)).await.unwrap();
        assert_eq!(rx.recv().await.unwrap(), sample_values(3));
    }

    #[tokio::test]
    async fn test_deliver_to_closed_channel() {
        let (bridge, rx) = AsyncBridge::channel(1);
        drop(rx);

        let result = bridge.deliver(sample_values(1)).await;
        assert!(matches!(result, Err(DriverError::ChannelClosed)));
    }
}
