//! Unit tests for the resolved Value graph

use core_types::{ClassInstance, ObjectData, Properties, RegExpFlags, RegExpValue, Value};
use num_bigint::BigInt;
use std::cell::RefCell;
use std::rc::Rc;

fn props(pairs: Vec<(&str, Value)>) -> Properties<Value> {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

#[test]
fn test_object_preserves_insertion_order() {
    let object = Value::object(props(vec![
        ("z", Value::Number(1.0)),
        ("a", Value::Number(2.0)),
    ]));
    assert_eq!(object.to_string(), r#"{"z":1,"a":2}"#);
}

#[test]
fn test_get_and_index() {
    let array = Value::array(vec![Value::from("x")]);
    let object = Value::object(props(vec![("list", array.clone())]));
    assert!(object.get("list").unwrap().same(&array));
    assert_eq!(array.index(0), Some(Value::from("x")));
    assert_eq!(array.index(1), None);
    assert_eq!(Value::Null.get("list"), None);
}

#[test]
fn test_bigint_display() {
    let value = Value::from(BigInt::from(-12345));
    assert_eq!(value.to_string(), "-12345n");
}

#[test]
fn test_regexp_display() {
    let re = RegExpValue::new("a+", RegExpFlags::from_chars("gm"));
    assert_eq!(Value::RegExp(Rc::new(re)).to_string(), "/a+/gm");
}

#[test]
fn test_class_instance_display_uses_tag() {
    let data = ObjectData {
        properties: props(vec![("x", Value::Number(1.0))]),
        class: Some(ClassInstance {
            name: "Point".to_string(),
            data: Box::new(()),
        }),
    };
    let value = Value::Object(Rc::new(RefCell::new(data)));
    assert_eq!(value.to_string(), r#"Point{"x":1}"#);
}

#[test]
fn test_mutual_cycle_renders_circular_once_per_edge() {
    let a = Value::array(vec![]);
    let b = Value::array(vec![a.clone()]);
    a.as_array().unwrap().borrow_mut().push(b.clone());
    assert_eq!(a.to_string(), "[[[Circular]]]");
}

#[test]
fn test_deep_eq_checks_class_tag() {
    let tagged = |name: Option<&str>| {
        let data = ObjectData {
            properties: Properties::new(),
            class: name.map(|n| ClassInstance {
                name: n.to_string(),
                data: Box::new(()),
            }),
        };
        Value::Object(Rc::new(RefCell::new(data)))
    };
    assert!(tagged(Some("A")).deep_eq(&tagged(Some("A"))));
    assert!(!tagged(Some("A")).deep_eq(&tagged(None)));
}

#[test]
fn test_debug_does_not_recurse_forever() {
    let v = Value::array(vec![]);
    v.as_array().unwrap().borrow_mut().push(v.clone());
    assert_eq!(format!("{:?}", v), "Array([[Circular]])");
}

#[test]
fn test_cycle_outlives_last_handle() {
    let object = Value::object(Properties::new());
    let handle = Rc::downgrade(object.as_object().unwrap());
    object
        .as_object()
        .unwrap()
        .borrow_mut()
        .properties
        .insert("self".to_string(), object.clone());
    drop(object);
    assert!(handle.upgrade().is_some());
}

#[test]
fn test_clear_releases_cycle() {
    let array = Value::array(Vec::new());
    let object = Value::object(props(vec![("items", array.clone())]));
    array.as_array().unwrap().borrow_mut().push(object.clone());
    let array_handle = Rc::downgrade(array.as_array().unwrap());
    let object_handle = Rc::downgrade(object.as_object().unwrap());

    object.clear();
    assert!(object.get("items").is_none());
    drop(object);
    drop(array);
    assert!(array_handle.upgrade().is_none());
    assert!(object_handle.upgrade().is_none());
}

#[test]
fn test_clear_drops_class_instance() {
    let object = Value::object(Properties::new());
    object.as_object().unwrap().borrow_mut().class = Some(ClassInstance {
        name: "Point".to_string(),
        data: Box::new(1u8),
    });
    object.clear();
    assert_eq!(object.as_object().unwrap().borrow().class_name(), None);
    Value::Number(1.0).clear();
}
