// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Lenient decoding of loosely typed backend responses

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::DeserializeOwned};
use serde_json::Value;

use cardfolio_core::util::string::parse_number_lenient;

/// Decode all elements of an array that are well-formed
///
/// Any other value, including `null`, is treated like an empty array.
#[must_use]
pub fn list_from_value<T>(value: Value) -> Vec<T>
where
    T: DeserializeOwned,
{
    let elements = match value {
        Value::Array(elements) => elements,
        Value::Null => return Vec::new(),
        value => {
            log::warn!("Expected an array instead of {value}");
            return Vec::new();
        }
    };
    elements
        .into_iter()
        .filter_map(|element| {
            serde_json::from_value(element)
                .inspect_err(|err| log::warn!("Skipping malformed element: {err}"))
                .ok()
        })
        .collect()
}

/// A list that decodes from any JSON value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LenientList<T>(pub Vec<T>);

impl<T> LenientList<T> {
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        let Self(inner) = self;
        inner
    }
}

impl<T> Default for LenientList<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<'de, T> Deserialize<'de> for LenientList<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer)
            .map(list_from_value)
            .map(Self)
    }
}

impl<T> Serialize for LenientList<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

pub(crate) fn deserialize_lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    LenientList::deserialize(deserializer).map(LenientList::into_inner)
}

/// Optional value that is discarded if malformed
pub(crate) fn deserialize_lenient_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value)
        .inspect_err(|err| log::warn!("Ignoring malformed value: {err}"))
        .ok())
}

/// Value that falls back to its default if missing or malformed
pub(crate) fn deserialize_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    deserialize_lenient_option(deserializer).map(Option::unwrap_or_default)
}

/// Decimal number from either a JSON number or a string
///
/// Blank strings are treated as missing.
pub(crate) fn deserialize_number_or_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                None
            } else {
                Some(parse_number_lenient(text))
            }
        }
        Value::Null => None,
        value => {
            log::warn!("Expected a number instead of {value}");
            None
        }
    };
    Ok(number.filter(|number| number.is_finite()))
}

/// Non-negative count from either a JSON number or a string
pub(crate) fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let count = deserialize_number_or_string(deserializer)?.and_then(|number| {
        if number < 0.0 {
            log::warn!("Ignoring negative count {number}");
            return None;
        }
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = number.min(f64::from(u32::MAX)) as u32;
        Some(count)
    });
    Ok(count)
}

/// Boolean flag that is `false` if missing, `null` or malformed
pub(crate) fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let flag = match Value::deserialize(deserializer)? {
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().is_some_and(|number| number != 0.0),
        Value::String(text) => text.trim().eq_ignore_ascii_case("true"),
        _ => false,
    };
    Ok(flag)
}

/// Strings from either an array, a string containing a JSON array, or a plain string
pub(crate) fn deserialize_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let strings = match Value::deserialize(deserializer)? {
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                Vec::new()
            } else if text.starts_with('[') {
                serde_json::from_str::<Value>(text)
                    .map(list_from_value)
                    .unwrap_or_else(|err| {
                        log::warn!("Malformed embedded array \"{text}\": {err}");
                        Vec::new()
                    })
            } else {
                vec![text.to_owned()]
            }
        }
        value => list_from_value(value),
    };
    Ok(strings)
}

#[cfg(test)]
mod tests;
