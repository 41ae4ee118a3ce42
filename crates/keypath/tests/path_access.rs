//! Public API behaviour of path-keyed get, set and remove.
//!
//! Exercises the crate-root functions with the default `.` separator and a
//! configured accessor loaded from TOML.

use keypath::{AccessorOptions, Container, NestedAccessor};
use serde_json::{Value, json};

fn container(value: Value) -> Container {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

#[test]
fn get_resolves_direct_and_nested_keys() {
    assert_eq!(keypath::get("a", &container(json!({"a": 1}))), Some(&json!(1)));
    assert_eq!(
        keypath::get("a.b", &container(json!({"a": {"b": 2}}))),
        Some(&json!(2))
    );
    assert_eq!(
        keypath::get("a.b.c", &container(json!({"a": {"b": {"c": 5}}}))),
        Some(&json!(5))
    );
}

#[test]
fn get_misses_return_none() {
    assert_eq!(keypath::get("a.b", &container(json!({"a": {}}))), None);
    assert_eq!(keypath::get("a.b", &Container::new()), None);
    assert_eq!(keypath::get("x.y", &container(json!({"a": 1}))), None);
    assert_eq!(keypath::get("a.b", &container(json!({"a": 1}))), None);
}

#[test]
fn get_with_custom_separator() {
    let slashed = NestedAccessor::with_separator("/").unwrap();
    assert_eq!(
        slashed.get("a/b", &container(json!({"a": {"b": 9}}))),
        Some(&json!(9))
    );
}

#[test]
fn set_round_trips_through_get() {
    let base = container(json!({"server": {"port": 80, "tls": {"enabled": false}}}));

    let cases = [
        ("server.port", json!(8080)),
        ("server.tls.enabled", json!(true)),
        ("server.tls.cert", json!("/etc/cert.pem")),
        ("client.retries", json!(3)),
        ("top", json!([1, 2, 3])),
    ];

    for (path, val) in cases {
        let updated = keypath::set(path, val.clone(), &base);
        assert_eq!(keypath::get(path, &updated), Some(&val), "path {path}");
    }
}

#[test]
fn set_keeps_siblings() {
    let updated = keypath::set("a.b", 2, &container(json!({"a": {"c": 3}})));
    assert_eq!(Value::Object(updated), json!({"a": {"b": 2, "c": 3}}));
}

#[test]
fn set_replaces_leaf_with_container() {
    let updated = keypath::set("a.b", json!({"d": 1}), &container(json!({"a": {"b": 2}})));
    assert_eq!(Value::Object(updated), json!({"a": {"b": {"d": 1}}}));
}

#[test]
fn remove_nulls_but_keeps_key() {
    let updated = keypath::remove("a.b", &container(json!({"a": {"b": 1, "c": 2}})));
    assert_eq!(Value::Object(updated.clone()), json!({"a": {"b": null, "c": 2}}));
    assert_eq!(keypath::get("a.b", &updated), None);
    assert!(updated["a"].as_object().unwrap().contains_key("b"));
}

#[test]
fn remove_absent_key_leaves_container_unchanged() {
    let c = container(json!({"a": {"c": 2}}));
    assert_eq!(keypath::remove("a.b", &c), c);
}

#[test]
fn remove_single_segment_leaves_container_unchanged() {
    let c = container(json!({"a": 1}));
    assert_eq!(keypath::remove("a", &c), c);
}

#[test]
fn operations_never_modify_input() {
    let original = container(json!({"a": {"b": 1, "c": {"d": 2}}}));
    let snapshot = original.clone();

    let _ = keypath::set("a.c.d", 3, &original);
    let _ = keypath::set("a", 0, &original);
    let _ = keypath::remove("a.b", &original);

    assert_eq!(original, snapshot);
}

#[test]
fn configured_accessor_from_toml() {
    let options = AccessorOptions::from_toml_str(
        r#"
        separator = "/"
        remove_mode = "delete"
        parent_join = "separator"
        root_remove = "apply"
    "#,
    )
    .unwrap();
    let accessor = NestedAccessor::new(options);

    let c = container(json!({"db": {"pool": {"min": 1, "max": 10}}, "debug": true}));

    let updated = accessor.remove("db/pool/min", &c);
    assert_eq!(
        Value::Object(updated.clone()),
        json!({"db": {"pool": {"max": 10}}, "debug": true})
    );
    assert!(!accessor.contains("db/pool/min", &updated));

    let updated = accessor.remove("debug", &updated);
    assert_eq!(Value::Object(updated), json!({"db": {"pool": {"max": 10}}}));
}

#[test]
fn flatten_lists_every_leaf() {
    let c = container(json!({"a": {"b": 1, "c": {}}, "d": [1]}));
    let flat = NestedAccessor::default().flatten(&c);

    let expected: Vec<(&str, Value)> =
        vec![("a.b", json!(1)), ("a.c", json!({})), ("d", json!([1]))];
    let actual: Vec<(&str, Value)> = flat.iter().map(|(k, v)| (k.as_str(), v.clone())).collect();
    assert_eq!(actual, expected);
}

#[test]
fn empty_separator_is_rejected() {
    assert!(NestedAccessor::with_separator("").is_err());
    assert!(keypath::Separator::new("").is_err());
}
