#[cfg(test)]
mod transformer {
    use crate::cache::{
        narrow_to_byte, transform_column, NumberToByteTransformer, TransformError, Value,
        ValueTransformer, ValueType,
    };

    #[test]
    fn integral_wraparound() {
        assert_eq!(narrow_to_byte(&Value::Int(300)), Ok(44));
        assert_eq!(narrow_to_byte(&Value::Int(-129)), Ok(127));
        assert_eq!(narrow_to_byte(&Value::Short(128)), Ok(-128));
        assert_eq!(narrow_to_byte(&Value::Long(256)), Ok(0));
        assert_eq!(narrow_to_byte(&Value::Long(-1)), Ok(-1));
        assert_eq!(narrow_to_byte(&Value::Byte(-7)), Ok(-7));
    }

    #[test]
    fn floating_goes_through_int() {
        assert_eq!(narrow_to_byte(&Value::Double(300.7)), Ok(44));
        assert_eq!(narrow_to_byte(&Value::Float(-1.9)), Ok(-1));
        assert_eq!(narrow_to_byte(&Value::Double(f64::NAN)), Ok(0));
        // saturates at i32::MAX before narrowing
        assert_eq!(narrow_to_byte(&Value::Double(1e10)), Ok(-1));
    }

    #[test]
    fn not_a_number() {
        let transformer = NumberToByteTransformer::instance();
        assert_eq!(
            transformer.get(&Value::Str("300".to_string())),
            Err(TransformError::NotANumber(ValueType::Str))
        );
        assert_eq!(
            transformer.get(&Value::Null),
            Err(TransformError::NotANumber(ValueType::Null))
        );
    }

    #[test]
    fn column() {
        let transformer = NumberToByteTransformer::instance();
        let values = vec![Value::Int(1), Value::Long(300), Value::Double(-2.5)];
        assert_eq!(
            transform_column(transformer, &values),
            Ok(vec![Value::Byte(1), Value::Byte(44), Value::Byte(-2)])
        );

        let values = vec![Value::Int(1), Value::Bool(true), Value::Int(2)];
        assert_eq!(
            transform_column(transformer, &values),
            Err(TransformError::NotANumber(ValueType::Bool))
        );
    }

    #[test]
    fn through_trait_object() {
        let transformer: &dyn ValueTransformer = NumberToByteTransformer::instance();
        assert_eq!(transformer.result_type(), ValueType::Byte);
        assert_eq!(transform_column(transformer, &[Value::Int(300)]), Ok(vec![Value::Byte(44)]));
    }
}
