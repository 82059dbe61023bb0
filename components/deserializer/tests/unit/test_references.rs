//! Back-references between statements

use deserializer::{
    deserialize, deserialize_all, DeserializeError, DeserializeOptions, ReferencePolicy, Value,
};

fn de(source: &str) -> Value {
    deserialize(source, &DeserializeOptions::new()).expect("deserialize failed")
}

#[test]
fn test_forward_reference_resolves() {
    let value = de("[$1]; 5");
    assert!(value.deep_eq(&Value::array(vec![Value::Number(5.0)])));
}

#[test]
fn test_object_self_reference_is_identity() {
    let value = de(r#"{"self":$0}"#);
    let inner = value.get("self").unwrap();
    assert!(inner.same(&value));
    // Still the same object two hops in
    assert!(inner.get("self").unwrap().same(&value));
}

#[test]
fn test_lone_self_reference_terminates() {
    assert_eq!(de("$0"), Value::Undefined);
}

#[test]
fn test_shared_structure() {
    let value = de(r#"[$1, $1]; {"n": 1}"#);
    let first = value.index(0).unwrap();
    let second = value.index(1).unwrap();
    assert!(first.same(&second));
    first
        .as_object()
        .unwrap()
        .borrow_mut()
        .properties
        .insert("n".to_string(), Value::Number(2.0));
    assert_eq!(second.get("n"), Some(Value::Number(2.0)));
}

#[test]
fn test_mutual_cycle_between_statements() {
    let all = deserialize_all(r#"{"next":$1}; {"next":$0}"#, &DeserializeOptions::new()).unwrap();
    assert!(all[0].get("next").unwrap().same(&all[1]));
    assert!(all[1].get("next").unwrap().same(&all[0]));
}

#[test]
fn test_backward_reference() {
    let all = deserialize_all("\"shared\"; [$0, $0]", &DeserializeOptions::new()).unwrap();
    assert_eq!(all[1].to_string(), r#"["shared","shared"]"#);
}

#[test]
fn test_deserialize_all_returns_every_statement() {
    let all = deserialize_all("1; 2; 3", &DeserializeOptions::new()).unwrap();
    assert_eq!(
        all,
        vec![Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)]
    );
}

#[test]
fn test_out_of_range_is_undefined_by_default() {
    let value = de("[$4]");
    assert_eq!(value.index(0), Some(Value::Undefined));
}

#[test]
fn test_out_of_range_strict_errors() {
    let options = DeserializeOptions::new().with_references(ReferencePolicy::Strict);
    let err = deserialize("[$4]; 1", &options).unwrap_err();
    assert_eq!(
        err,
        DeserializeError::UnresolvedReference {
            index: 4,
            statements: 2
        }
    );
}

#[test]
fn test_huge_index_is_out_of_range() {
    let value = de("[$99999999999999999999999999]");
    assert_eq!(value.index(0), Some(Value::Undefined));
}

#[test]
fn test_clear_frees_self_reference() {
    let value = deserialize(r#"{"self":$0,"n":1}"#, &DeserializeOptions::new()).unwrap();
    let handle = std::rc::Rc::downgrade(value.as_object().unwrap());
    value.clear();
    drop(value);
    assert!(handle.upgrade().is_none());
}
