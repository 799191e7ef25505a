use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use super::{Result, TransformError, Value, ValueTransformer, ValueType};

const NAME: &str = "NumberToByteTransformer";

/// Narrows numbers to a signed byte. There is exactly one instance, reached
/// through [`NumberToByteTransformer::instance`]; deserializing hands back
/// that same instance.
#[derive(Debug, PartialEq, Eq)]
pub struct NumberToByteTransformer {
    _private: (),
}

static INSTANCE: NumberToByteTransformer = NumberToByteTransformer { _private: () };

impl NumberToByteTransformer {
    pub fn instance() -> &'static NumberToByteTransformer {
        &INSTANCE
    }
}

/// Truncates to the low eight bits. Floating values go through a 32-bit
/// integer first, saturating at its bounds with NaN as zero.
pub fn narrow_to_byte(value: &Value) -> Result<i8> {
    match *value {
        Value::Byte(v) => Ok(v),
        Value::Short(v) => Ok(v as i8),
        Value::Int(v) => Ok(v as i8),
        Value::Long(v) => Ok(v as i8),
        Value::Float(v) => Ok(v as i32 as i8),
        Value::Double(v) => Ok(v as i32 as i8),
        _ => Err(TransformError::NotANumber(value.value_type())),
    }
}

impl ValueTransformer for NumberToByteTransformer {
    fn result_type(&self) -> ValueType {
        ValueType::Byte
    }

    fn get(&self, value: &Value) -> Result<Value> {
        narrow_to_byte(value).map(Value::Byte)
    }
}

impl Serialize for NumberToByteTransformer {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_unit_struct(NAME)
    }
}

struct InstanceVisitor;

impl<'de> Visitor<'de> for InstanceVisitor {
    type Value = &'static NumberToByteTransformer;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unit struct {}", NAME)
    }

    fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(NumberToByteTransformer::instance())
    }
}

impl<'de> Deserialize<'de> for &'static NumberToByteTransformer {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_unit_struct(NAME, InstanceVisitor)
    }
}
