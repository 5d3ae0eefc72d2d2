//! Driver error taxonomy

use simple_device_shared::ValueError;
use thiserror::Error;

/// Errors returned to the host from driver entry points
#[derive(Error, Debug)]
pub enum DriverError {
    /// Request or parameter count is not exactly one
    #[error("{operation}: {count} {what} supplied; only one supported")]
    UnsupportedBatch {
        operation: &'static str,
        what: &'static str,
        count: usize,
    },

    /// A parameter's payload does not have the type its resource requires
    #[error(transparent)]
    TypeMismatch(ValueError),

    /// A value does not fit its declared type
    #[error(transparent)]
    Range(ValueError),

    #[error("empty sample range: {min}..{max}")]
    EmptyRange { min: i64, max: i64 },

    #[error("driver not initialized")]
    NotInitialized,

    #[error("async channel closed by host")]
    ChannelClosed,
}

impl From<ValueError> for DriverError {
    fn from(err: ValueError) -> Self {
        match err {
            ValueError::TypeMismatch { .. } => DriverError::TypeMismatch(err),
            ValueError::OutOfRange { .. } => DriverError::Range(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_device_shared::ValueType;

    #[test]
    fn test_value_error_mapping() {
        let mismatch = ValueError::TypeMismatch {
            expected: ValueType::Int8,
            actual: ValueType::Int32,
        };
        assert!(matches!(
            DriverError::from(mismatch),
            DriverError::TypeMismatch(_)
        ));

        let range = ValueError::OutOfRange {
            value_type: ValueType::Int8,
            value: 300,
            min: -128,
            max: 127,
        };
        assert!(matches!(DriverError::from(range), DriverError::Range(_)));
    }

    #[test]
    fn test_value_error_message_not_repeated() {
        let err = DriverError::from(ValueError::TypeMismatch {
            expected: ValueType::Int8,
            actual: ValueType::Int32,
        });
        assert_eq!(err.to_string(), "type mismatch: expected Int8, got Int32");

        let err = DriverError::from(ValueError::OutOfRange {
            value_type: ValueType::Int8,
            value: 300,
            min: -128,
            max: 127,
        });
        assert_eq!(err.to_string(), "value 300 out of range for Int8 (-128..=127)");
    }

    #[test]
    fn test_unsupported_batch_message() {
        let err = DriverError::UnsupportedBatch {
            operation: "handle_read_commands",
            what: "command requests",
            count: 2,
        };
        assert_eq!(
            err.to_string(),
            "handle_read_commands: 2 command requests supplied; only one supported"
        );
    }
}
