use report_script_lib::cache::{NumberToByteTransformer, Value, ValueTransformer, ValueType};

#[test]
fn narrows_300() {
    let transformer = NumberToByteTransformer::instance();
    assert_eq!(transformer.result_type(), ValueType::Byte);
    assert_eq!(transformer.get(&Value::Int(300)), Ok(Value::Byte(44)));
    // no state between calls
    assert_eq!(transformer.get(&Value::Int(300)), Ok(Value::Byte(44)));
}

#[test]
fn single_instance() {
    let first = NumberToByteTransformer::instance();
    let second = NumberToByteTransformer::instance();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn serde_keeps_identity() {
    let serialized = serde_json::to_string(NumberToByteTransformer::instance()).unwrap();
    let restored: &'static NumberToByteTransformer = serde_json::from_str(&serialized).unwrap();
    assert!(std::ptr::eq(restored, NumberToByteTransformer::instance()));
}

#[test]
fn shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                NumberToByteTransformer::instance().get(&Value::Long(256 + i))
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Ok(Value::Byte(i as i8)));
    }
}
