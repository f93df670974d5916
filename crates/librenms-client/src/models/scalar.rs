//! Lenient scalar types
//!
//! LibreNMS is not consistent about JSON types: the same column comes back as
//! `true` from one endpoint and `1` from another, and floats or ids are
//! sometimes quoted. These wrappers accept every shape seen in the wild.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Boolean sent by the API as either `true`/`false` or `0`/`1`.
///
/// Serializes as `0`/`1`, which every endpoint accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bool(pub bool);

impl Bool {
    /// The wrapped value
    pub fn get(self) -> bool {
        self.0
    }
}

impl From<bool> for Bool {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<Bool> for bool {
    fn from(value: Bool) -> Self {
        value.0
    }
}

impl PartialEq<bool> for Bool {
    fn eq(&self, other: &bool) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(self.0))
    }
}

struct BoolVisitor;

impl Visitor<'_> for BoolVisitor {
    type Value = Bool;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean or an integer")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Bool, E> {
        Ok(Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Bool, E> {
        Ok(Bool(v != 0))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Bool, E> {
        Ok(Bool(v != 0))
    }

    // null leaves the zero value in place
    fn visit_unit<E: de::Error>(self) -> Result<Bool, E> {
        Ok(Bool(false))
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BoolVisitor)
    }
}

/// Float sent by the API as either a JSON number or a numeric string.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Float64(pub f64);

impl Float64 {
    /// The wrapped value
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Float64 {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Float64> for f64 {
    fn from(value: Float64) -> Self {
        value.0
    }
}

impl fmt::Display for Float64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Serialize for Float64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

struct Float64Visitor;

impl Visitor<'_> for Float64Visitor {
    type Value = Float64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a numeric string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Float64, E> {
        Ok(Float64(v))
    }

    #[allow(clippy::cast_precision_loss, reason = "coordinates and percentages fit in f64")]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Float64, E> {
        Ok(Float64(v as f64))
    }

    #[allow(clippy::cast_precision_loss, reason = "coordinates and percentages fit in f64")]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Float64, E> {
        Ok(Float64(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Float64, E> {
        v.trim()
            .parse::<f64>()
            .map(Float64)
            .map_err(|e| E::custom(format!("failed to parse Float64 from string {v:?}: {e}")))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Float64, E> {
        Ok(Float64(0.0))
    }
}

impl<'de> Deserialize<'de> for Float64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(Float64Visitor)
    }
}

/// `deserialize_with` helper: `null` becomes `T::default()`.
///
/// `#[serde(default)]` only covers a missing key; LibreNMS also sends
/// explicit `null` for unset columns.
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `deserialize_with` helper: string, number, bool or null into `Option<String>`.
///
/// Pair with `#[serde(default)]` so a missing key also yields `None`.
pub fn opt_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(serde_json::Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(de::Error::custom(format!("expected a scalar, got {other}"))),
    }
}

/// `deserialize_with` helper: number, numeric string or null into `Option<i64>`.
///
/// An empty string is treated as null.
pub fn opt_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("{n} is not an integer"))),
        Some(serde_json::Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(serde_json::Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|e| de::Error::custom(format!("failed to parse integer from {s:?}: {e}"))),
        Some(other) => Err(de::Error::custom(format!("expected an integer, got {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Lenient {
        #[serde(default, deserialize_with = "opt_string")]
        text: Option<String>,
        #[serde(default, deserialize_with = "opt_i64")]
        number: Option<i64>,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Nullable {
        #[serde(deserialize_with = "null_default")]
        name: String,
        #[serde(deserialize_with = "null_default")]
        id: i64,
        #[serde(deserialize_with = "null_default")]
        enabled: bool,
        #[serde(deserialize_with = "null_default")]
        members: Vec<i64>,
    }

    #[test]
    fn null_becomes_zero_value() {
        let v: Nullable =
            serde_json::from_str(r#"{"name": null, "id": null, "enabled": null, "members": null}"#).unwrap();
        assert_eq!(v.name, "");
        assert_eq!(v.id, 0);
        assert!(!v.enabled);
        assert!(v.members.is_empty());

        let v: Nullable = serde_json::from_str(r#"{"name": "core", "id": 4, "members": [1, 2]}"#).unwrap();
        assert_eq!(v.name, "core");
        assert_eq!(v.id, 4);
        assert_eq!(v.members, vec![1, 2]);

        assert!(serde_json::from_str::<Nullable>(r#"{"id": "x"}"#).is_err());
    }

    #[test]
    fn bool_accepts_ints_and_bools() {
        let values: Vec<Bool> = serde_json::from_str("[true, false, 1, 0, 2, null]").unwrap();
        assert_eq!(
            values,
            vec![Bool(true), Bool(false), Bool(true), Bool(false), Bool(true), Bool(false)]
        );
        assert!(serde_json::from_str::<Bool>(r#""yes""#).is_err());
    }

    #[test]
    fn bool_serializes_as_int() {
        assert_eq!(serde_json::to_string(&Bool(true)).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Bool(false)).unwrap(), "0");
    }

    #[test]
    fn float_accepts_numbers_and_strings() {
        let values: Vec<Float64> = serde_json::from_str(r#"[52.5, "-1.25", 7, " 99.9 "]"#).unwrap();
        assert_eq!(values, vec![Float64(52.5), Float64(-1.25), Float64(7.0), Float64(99.9)]);
        assert!(serde_json::from_str::<Float64>(r#""north""#).is_err());
        assert_eq!(serde_json::to_string(&Float64(12.5)).unwrap(), "12.5");
    }

    #[test]
    fn lenient_fields() {
        let v: Lenient = serde_json::from_str(r#"{"text": 42, "number": "15"}"#).unwrap();
        assert_eq!(v.text.as_deref(), Some("42"));
        assert_eq!(v.number, Some(15));

        let v: Lenient = serde_json::from_str(r#"{"text": null, "number": ""}"#).unwrap();
        assert_eq!(v.text, None);
        assert_eq!(v.number, None);

        let v: Lenient = serde_json::from_str("{}").unwrap();
        assert_eq!(v.text, None);
        assert_eq!(v.number, None);

        assert!(serde_json::from_str::<Lenient>(r#"{"number": "abc"}"#).is_err());
    }
}
