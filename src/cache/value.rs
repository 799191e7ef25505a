use std::fmt;
use std::fmt::Formatter;

use serde::{Deserialize, Serialize};

/// A single cached column value.
#[derive(Debug, Clone, PartialOrd, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Str(String),
    Bool(bool),
    Null,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Str,
    Bool,
    Null,
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Byte(_) => ValueType::Byte,
            Value::Short(_) => ValueType::Short,
            Value::Int(_) => ValueType::Int,
            Value::Long(_) => ValueType::Long,
            Value::Float(_) => ValueType::Float,
            Value::Double(_) => ValueType::Double,
            Value::Str(_) => ValueType::Str,
            Value::Bool(_) => ValueType::Bool,
            Value::Null => ValueType::Null,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Byte => write!(f, "Byte"),
            ValueType::Short => write!(f, "Short"),
            ValueType::Int => write!(f, "Integer"),
            ValueType::Long => write!(f, "Long"),
            ValueType::Float => write!(f, "Float"),
            ValueType::Double => write!(f, "Double"),
            ValueType::Str => write!(f, "String"),
            ValueType::Bool => write!(f, "Boolean"),
            ValueType::Null => write!(f, "Null"),
        }
    }
}
