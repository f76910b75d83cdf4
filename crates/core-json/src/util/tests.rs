// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use serde_json::json;

use super::*;

#[derive(Debug, Deserialize, PartialEq)]
struct Sample {
    #[serde(default, deserialize_with = "deserialize_number_or_string")]
    number: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_count")]
    count: Option<u32>,

    #[serde(default, deserialize_with = "deserialize_flag")]
    flag: bool,

    #[serde(default, deserialize_with = "deserialize_string_list")]
    strings: Vec<String>,
}

fn sample(value: Value) -> Sample {
    serde_json::from_value(value).unwrap()
}

#[test]
fn list_from_non_array_values() {
    assert!(list_from_value::<u32>(Value::Null).is_empty());
    assert!(list_from_value::<u32>(json!({"items": [1, 2]})).is_empty());
    assert!(list_from_value::<u32>(json!("[1, 2]")).is_empty());
    assert!(list_from_value::<u32>(json!(42)).is_empty());
}

#[test]
fn list_skips_malformed_elements() {
    assert_eq!(vec![1, 3], list_from_value::<u32>(json!([1, "two", 3, null])));
}

#[test]
fn lenient_list_from_json() {
    let list: LenientList<u32> = serde_json::from_str("null").unwrap();
    assert!(list.into_inner().is_empty());
    let list: LenientList<u32> = serde_json::from_str("[7, 9]").unwrap();
    assert_eq!(LenientList(vec![7, 9]), list);
    assert!(serde_json::from_str::<LenientList<u32>>("[7,").is_err());
}

#[test]
fn numbers_from_strings() {
    assert_eq!(Some(12.5), sample(json!({"number": "12.5"})).number);
    assert_eq!(Some(12.5), sample(json!({"number": 12.5})).number);
    assert_eq!(Some(1200.0), sample(json!({"number": "$1,200"})).number);
    assert_eq!(Some(0.0), sample(json!({"number": "n/a"})).number);
    assert_eq!(None, sample(json!({"number": " "})).number);
    assert_eq!(None, sample(json!({"number": null})).number);
    assert_eq!(None, sample(json!({})).number);
}

#[test]
fn counts() {
    assert_eq!(Some(3), sample(json!({"count": 3})).count);
    assert_eq!(Some(3), sample(json!({"count": "3"})).count);
    assert_eq!(None, sample(json!({"count": -1})).count);
    assert_eq!(None, sample(json!({"count": null})).count);
    assert_eq!(None, sample(json!({})).count);
}

#[test]
fn flags() {
    assert!(sample(json!({"flag": true})).flag);
    assert!(sample(json!({"flag": "TRUE"})).flag);
    assert!(sample(json!({"flag": 1})).flag);
    assert!(!sample(json!({"flag": null})).flag);
    assert!(!sample(json!({})).flag);
}

#[test]
fn string_lists() {
    assert_eq!(
        vec!["a.png".to_owned(), "b.png".to_owned()],
        sample(json!({"strings": ["a.png", "b.png"]})).strings
    );
    assert_eq!(
        vec!["Dark Magician.png".to_owned()],
        sample(json!({"strings": "[\"Dark Magician.png\"]"})).strings
    );
    assert_eq!(
        vec!["https://example.com/card".to_owned()],
        sample(json!({"strings": "https://example.com/card"})).strings
    );
    assert!(sample(json!({"strings": null})).strings.is_empty());
    assert!(sample(json!({"strings": "[broken"})).strings.is_empty());
}
