// Test utilities and generators for dun property-based testing

#![allow(dead_code)]

use dun_core::matcher::Matcher;
use proptest::prelude::*;
use serde_json::{json, Map, Value};

// Shape fixtures, discriminated by the default "type" key

pub fn circle() -> Value {
    json!({"type": "circle", "radius": 5})
}

pub fn rectangle() -> Value {
    json!({"type": "rectangle", "width": 4, "height": 6})
}

pub fn triangle() -> Value {
    json!({"type": "triangle", "base": 10, "height": 3})
}

// Animal fixtures, discriminated by a custom "kind" key

pub fn dog() -> Value {
    json!({"kind": "dog", "name": "Rex"})
}

pub fn cat() -> Value {
    json!({"kind": "cat", "lives": 9})
}

pub fn bird() -> Value {
    json!({"kind": "bird", "can_fly": true})
}

/// Exhaustive area matcher over the three shape tags
pub fn shape_area_matcher() -> Matcher<'static, f64> {
    Matcher::new()
        .on("circle", |v| {
            let radius = v["radius"].as_f64().unwrap();
            std::f64::consts::PI * radius * radius
        })
        .on("rectangle", |v| {
            v["width"].as_f64().unwrap() * v["height"].as_f64().unwrap()
        })
        .on("triangle", |v| {
            v["base"].as_f64().unwrap() * v["height"].as_f64().unwrap() / 2.0
        })
}

/// Generate non-empty tag strings
pub fn arb_tag() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("circle".to_string()),
        Just("rectangle".to_string()),
        Just("triangle".to_string()),
        "[a-z][a-z0-9_]{0,8}",
    ]
}

/// Generate discriminant field names
pub fn arb_discriminant() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("type".to_string()),
        Just("kind".to_string()),
        Just("variant".to_string()),
        "[a-z][a-z0-9_]{0,6}",
    ]
}

/// Generate shallow payload values
pub fn arb_payload_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::from),
    ]
}

/// Generate a union value: an object with `tag` at `discriminant` plus
/// payload fields. The discriminant field is written last so payload keys
/// can never clobber the tag.
pub fn arb_union_with(discriminant: String, tag: String) -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[a-z][a-z0-9_]{0,6}", arb_payload_value(), 0..4).prop_map(
        move |payload| {
            let mut object = Map::new();
            for (key, value) in payload {
                object.insert(key, value);
            }
            object.insert(discriminant.clone(), Value::String(tag.clone()));
            Value::Object(object)
        },
    )
}

/// Generate a (discriminant, tag, union) triple
pub fn arb_union() -> impl Strategy<Value = (String, String, Value)> {
    (arb_discriminant(), arb_tag()).prop_flat_map(|(discriminant, tag)| {
        arb_union_with(discriminant.clone(), tag.clone())
            .prop_map(move |value| (discriminant.clone(), tag.clone(), value))
    })
}

/// Generate values that are not well-formed unions under "type"
pub fn arb_non_union() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        "[a-zA-Z0-9]{0,12}".prop_map(Value::from),
        Just(json!([])),
        Just(json!([{"type": "circle"}])),
        Just(json!({})),
        Just(json!({"type": 42})),
        Just(json!({"type": true})),
        Just(json!({"type": null})),
        Just(json!({"type": ""})),
        Just(json!({"type": {"nested": "circle"}})),
        Just(json!({"kind": "dog"})),
    ]
}
