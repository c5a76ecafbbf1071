//! Integration tests for the JSON helpers.

use std::collections::BTreeMap;

use selkie_common::{JsonError, Rectangle, deserialize, serialize};
use serde::{Deserialize, Serialize};

#[test]
fn test_rectangle_serializes_own_fields() {
    let text = serialize(&Rectangle::new(10.0, 20.0)).unwrap();
    assert_eq!(text, r#"{"width":10.0,"height":20.0}"#);
}

#[test]
fn test_rectangle_round_trip_keeps_behavior() {
    let original = Rectangle::new(3.0, 4.5);
    let restored: Rectangle = deserialize(&serialize(&original).unwrap()).unwrap();
    assert_eq!(restored, original);
    assert!((restored.area() - 13.5).abs() < f64::EPSILON);
}

#[test]
fn test_deserialize_from_handwritten_text() {
    let rect: Rectangle = deserialize(r#"{ "width": 2, "height": 8 }"#).unwrap();
    assert!((rect.area() - 16.0).abs() < f64::EPSILON);
}

#[test]
fn test_deserialize_rejects_wrong_shape() {
    let result: Result<Rectangle, _> = deserialize(r#"{ "width": "wide" }"#);
    assert!(matches!(result, Err(JsonError::Deserialize(_))));
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Palette {
    name: String,
    colors: Vec<String>,
    default: Option<String>,
    dark: bool,
    weights: BTreeMap<String, u32>,
}

#[test]
fn test_nested_round_trip() {
    let palette = Palette {
        name: "night".to_string(),
        colors: vec!["#000".to_string(), "#123".to_string()],
        default: None,
        dark: true,
        weights: BTreeMap::from([("bold".to_string(), 700), ("thin".to_string(), 100)]),
    };

    let text = serialize(&palette).unwrap();
    assert!(text.contains(r#""default":null"#));
    let restored: Palette = deserialize(&text).unwrap();
    assert_eq!(restored, palette);
}
