//! Value model integration tests.

use runtype_core::*;
use serde_json::json;

#[test]
fn test_json_conversion_keeps_key_order() {
    let value = Value::from(json!({"b": 1, "a": 2, "2": 3, "1": 4}));
    let keys: Vec<String> = value
        .own_entries()
        .into_iter()
        .map(|(key, _)| key.into_owned())
        .collect();
    assert_eq!(keys, vec!["1", "2", "b", "a"]);
}

#[test]
fn test_to_json_string_matches_host_serializer() {
    let value = Value::from(
        Object::builder()
            .property("n", 1.5)
            .property("skip", Value::Undefined)
            .property("list", Value::array([Value::Undefined, Value::from(Function::new("f"))]))
            .property("nan", f64::NAN)
            .build(),
    );
    assert_eq!(
        value.to_json_string(DEFAULT_MAX_DEPTH).unwrap().as_deref(),
        Some(r#"{"n":1.5,"list":[null,null],"nan":null}"#)
    );
    assert_eq!(Value::Undefined.to_json_string(DEFAULT_MAX_DEPTH).unwrap(), None);
}

#[test]
fn test_bigint_is_not_serializable() {
    let value = Value::array([Value::from(BigInt::from(7u8))]);
    assert!(matches!(value.to_json(DEFAULT_MAX_DEPTH), Err(JsonError::BigInt)));
}

#[test]
fn test_depth_limit() {
    let mut value = Value::from(0);
    for _ in 0..10 {
        value = Value::array([value]);
    }
    assert!(matches!(value.to_json(4), Err(JsonError::DepthExceeded(4))));
    assert!(value.to_json(DEFAULT_MAX_DEPTH).is_ok());
}

#[test]
fn test_class_chain() {
    let animal = Class::new_abstract("Animal");
    let dog = animal.extend("Dog");
    let rex = dog.construct([("name", "Rex")]).unwrap();
    assert!(rex.is_instance_of(&dog));
    assert!(rex.is_instance_of(&animal));
    assert!(!rex.is_instance_of(&Class::new("Animal")));
    assert!(matches!(
        animal.construct([("name", "x")]),
        Err(ValueError::AbstractInstantiation(_))
    ));
    assert_eq!(Value::from(dog).type_of(), "function");
}

#[test]
fn test_literal_set_membership() {
    let mut set = LiteralSet::new();
    set.insert(&Value::from(0));
    set.insert(&Value::from("a"));
    set.insert(&Value::from(f64::NAN));
    assert!(set.contains(&Value::from(-0.0)));
    assert!(set.contains(&Value::from("a")));
    assert!(!set.contains(&Value::from(f64::NAN)));
    assert!(!set.contains(&Value::from("0")));
    assert_eq!(set.len(), 2);
}
