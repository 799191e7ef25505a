use log::trace;
use thiserror::Error;

pub mod number_to_byte;
pub mod value;

pub use number_to_byte::{narrow_to_byte, NumberToByteTransformer};
pub use value::{Value, ValueType};

pub type Result<T> = std::result::Result<T, TransformError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("Expected a number, got {0}")]
    NotANumber(ValueType),
}

/// Converts values on their way into the columnar cache.
pub trait ValueTransformer: Send + Sync {
    fn result_type(&self) -> ValueType;
    fn get(&self, value: &Value) -> Result<Value>;
}

/// Runs every value of a column through `transformer`, stopping at the first
/// value it rejects.
pub fn transform_column<T>(transformer: &T, values: &[Value]) -> Result<Vec<Value>>
where
    T: ValueTransformer + ?Sized,
{
    trace!(
        "Transforming {} values to {}",
        values.len(),
        transformer.result_type()
    );
    values.iter().map(|value| transformer.get(value)).collect()
}
