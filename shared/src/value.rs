//! Typed reading values
//!
//! A [`CommandValue`] binds a typed payload to the device resource it was
//! read from (or written to) and the moment it was produced.

use std::fmt;

use thiserror::Error;

/// Type tag of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Float64,
    String,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Bool => "Bool",
            ValueType::Int8 => "Int8",
            ValueType::Int16 => "Int16",
            ValueType::Int32 => "Int32",
            ValueType::Int64 => "Int64",
            ValueType::Float64 => "Float64",
            ValueType::String => "String",
        };
        f.write_str(name)
    }
}

/// Errors raised when building or reading a [`CommandValue`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("value {value} out of range for {value_type} ({min}..={max})")]
    OutOfRange {
        value_type: ValueType,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: ValueType,
        actual: ValueType,
    },
}

/// Payload of a reading, tagged with its width
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float64(f64),
    String(String),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Bool(_) => ValueType::Bool,
            Value::Int8(_) => ValueType::Int8,
            Value::Int16(_) => ValueType::Int16,
            Value::Int32(_) => ValueType::Int32,
            Value::Int64(_) => ValueType::Int64,
            Value::Float64(_) => ValueType::Float64,
            Value::String(_) => ValueType::String,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int8(v) => write!(f, "{}", v),
            Value::Int16(v) => write!(f, "{}", v),
            Value::Int32(v) => write!(f, "{}", v),
            Value::Int64(v) => write!(f, "{}", v),
            Value::Float64(v) => write!(f, "{}", v),
            Value::String(v) => f.write_str(v),
        }
    }
}

/// A typed value bound to a device resource and an origin timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct CommandValue {
    /// Name of the device resource this value belongs to
    pub device_resource_name: String,
    /// Nanoseconds since Unix epoch at which the value was produced
    pub origin: i64,
    pub value: Value,
}

/// Narrow `value` into the target integer width or report the bounds it missed
fn narrow<T>(value_type: ValueType, value: i64, min: T, max: T) -> Result<T, ValueError>
where
    T: TryFrom<i64> + Into<i64> + Copy,
{
    T::try_from(value).map_err(|_| ValueError::OutOfRange {
        value_type,
        value,
        min: min.into(),
        max: max.into(),
    })
}

impl CommandValue {
    /// Create a value of any type
    pub fn new(device_resource_name: impl Into<String>, origin: i64, value: Value) -> Self {
        Self {
            device_resource_name: device_resource_name.into(),
            origin,
            value,
        }
    }

    pub fn new_bool(device_resource_name: impl Into<String>, origin: i64, value: bool) -> Self {
        Self::new(device_resource_name, origin, Value::Bool(value))
    }

    /// Create an Int8 value, failing if `value` does not fit in 8 bits
    pub fn new_int8(
        device_resource_name: impl Into<String>,
        origin: i64,
        value: i64,
    ) -> Result<Self, ValueError> {
        let v = narrow(ValueType::Int8, value, i8::MIN, i8::MAX)?;
        Ok(Self::new(device_resource_name, origin, Value::Int8(v)))
    }

    /// Create an Int16 value, failing if `value` does not fit in 16 bits
    pub fn new_int16(
        device_resource_name: impl Into<String>,
        origin: i64,
        value: i64,
    ) -> Result<Self, ValueError> {
        let v = narrow(ValueType::Int16, value, i16::MIN, i16::MAX)?;
        Ok(Self::new(device_resource_name, origin, Value::Int16(v)))
    }

    /// Create an Int32 value, failing if `value` does not fit in 32 bits
    pub fn new_int32(
        device_resource_name: impl Into<String>,
        origin: i64,
        value: i64,
    ) -> Result<Self, ValueError> {
        let v = narrow(ValueType::Int32, value, i32::MIN, i32::MAX)?;
        Ok(Self::new(device_resource_name, origin, Value::Int32(v)))
    }

    pub fn new_int64(device_resource_name: impl Into<String>, origin: i64, value: i64) -> Self {
        Self::new(device_resource_name, origin, Value::Int64(value))
    }

    pub fn new_float64(device_resource_name: impl Into<String>, origin: i64, value: f64) -> Self {
        Self::new(device_resource_name, origin, Value::Float64(value))
    }

    pub fn new_string(
        device_resource_name: impl Into<String>,
        origin: i64,
        value: impl Into<String>,
    ) -> Self {
        Self::new(device_resource_name, origin, Value::String(value.into()))
    }

    /// Get the type tag of the payload
    pub fn value_type(&self) -> ValueType {
        self.value.value_type()
    }

    fn mismatch(&self, expected: ValueType) -> ValueError {
        ValueError::TypeMismatch {
            expected,
            actual: self.value_type(),
        }
    }

    pub fn bool_value(&self) -> Result<bool, ValueError> {
        match self.value {
            Value::Bool(v) => Ok(v),
            _ => Err(self.mismatch(ValueType::Bool)),
        }
    }

    /// Get the Int8 payload, or a type mismatch if the value has another type
    pub fn int8_value(&self) -> Result<i8, ValueError> {
        match self.value {
            Value::Int8(v) => Ok(v),
            _ => Err(self.mismatch(ValueType::Int8)),
        }
    }

    pub fn int16_value(&self) -> Result<i16, ValueError> {
        match self.value {
            Value::Int16(v) => Ok(v),
            _ => Err(self.mismatch(ValueType::Int16)),
        }
    }

    /// Get the Int32 payload, or a type mismatch if the value has another type
    pub fn int32_value(&self) -> Result<i32, ValueError> {
        match self.value {
            Value::Int32(v) => Ok(v),
            _ => Err(self.mismatch(ValueType::Int32)),
        }
    }

    pub fn int64_value(&self) -> Result<i64, ValueError> {
        match self.value {
            Value::Int64(v) => Ok(v),
            _ => Err(self.mismatch(ValueType::Int64)),
        }
    }

    pub fn float64_value(&self) -> Result<f64, ValueError> {
        match self.value {
            Value::Float64(v) => Ok(v),
            _ => Err(self.mismatch(ValueType::Float64)),
        }
    }

    pub fn string_value(&self) -> Result<&str, ValueError> {
        match &self.value {
            Value::String(v) => Ok(v),
            _ => Err(self.mismatch(ValueType::String)),
        }
    }
}

impl fmt::Display for CommandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} @{}",
            self.device_resource_name,
            self.value_type(),
            self.value,
            self.origin
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int8_bounds() {
        assert!(CommandValue::new_int8("SmallInt", 1, -128).is_ok());
        assert!(CommandValue::new_int8("SmallInt", 1, 127).is_ok());

        let err = CommandValue::new_int8("SmallInt", 1, 128).unwrap_err();
        assert_eq!(
            err,
            ValueError::OutOfRange {
                value_type: ValueType::Int8,
                value: 128,
                min: -128,
                max: 127,
            }
        );
        assert!(CommandValue::new_int8("SmallInt", 1, -129).is_err());
    }

    #[test]
    fn test_int32_bounds() {
        let min = CommandValue::new_int32("BigInt", 1, i32::MIN as i64).unwrap();
        assert_eq!(min.int32_value().unwrap(), i32::MIN);

        assert!(CommandValue::new_int32("BigInt", 1, i32::MAX as i64 + 1).is_err());
        assert!(CommandValue::new_int32("BigInt", 1, i32::MIN as i64 - 1).is_err());
    }

    #[test]
    fn test_int16_out_of_range() {
        let err = CommandValue::new_int16("Medium", 1, 40_000).unwrap_err();
        assert!(matches!(
            err,
            ValueError::OutOfRange { value_type: ValueType::Int16, .. }
        ));
    }

    #[test]
    fn test_value_keeps_name_and_origin() {
        let cv = CommandValue::new_int8("SmallInt", 42, 7).unwrap();
        assert_eq!(cv.device_resource_name, "SmallInt");
        assert_eq!(cv.origin, 42);
        assert_eq!(cv.value_type(), ValueType::Int8);
        assert_eq!(cv.int8_value().unwrap(), 7);
    }

    #[test]
    fn test_accessor_type_mismatch() {
        let cv = CommandValue::new_int32("SmallInt", 1, 42).unwrap();
        assert_eq!(
            cv.int8_value().unwrap_err(),
            ValueError::TypeMismatch {
                expected: ValueType::Int8,
                actual: ValueType::Int32,
            }
        );

        let text = CommandValue::new_string("Label", 1, "hello");
        assert_eq!(text.string_value().unwrap(), "hello");
        assert!(text.bool_value().is_err());
    }

    #[test]
    fn test_display() {
        let cv = CommandValue::new_int8("SmallInt", 5, -3).unwrap();
        assert_eq!(cv.to_string(), "SmallInt: Int8 -3 @5");
    }
}
