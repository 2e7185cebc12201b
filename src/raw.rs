//! Typed representation of the tag dictionary produced by an Exif decoder.

use crate::features::error::MetadataError;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Placeholder exiftool prints for binary blobs (thumbnails, maker notes).
static BINARY_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(Binary data (\d+) bytes, use -b option to extract\)$")
        .expect("binary placeholder pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rational {
    pub numerator: i64,
    pub denominator: i64,
}

impl Rational {
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Decimal value, `None` for a zero denominator.
    pub fn to_f64(self) -> Option<f64> {
        (self.denominator != 0).then(|| self.numerator as f64 / self.denominator as f64)
    }
}

/// Binary payload that is never surfaced, only acknowledged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OpaqueData {
    pub bytes: Option<usize>,
}

/// A single decoded tag value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    Integer(i64),
    Rational(Rational),
    Decimal(f64),
    Text(String),
    Sequence(Vec<RawValue>),
    Opaque(OpaqueData),
}

impl RawValue {
    /// Converts a decoder's JSON value. `null` means the tag is absent.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(Self::Text(b.to_string())),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Integer)
                .or_else(|| n.as_f64().map(Self::Decimal)),
            Value::String(s) => Some(parse_binary_placeholder(s).unwrap_or_else(|| Self::Text(s.clone()))),
            Value::Array(items) => Some(Self::Sequence(
                items.iter().filter_map(Self::from_json).collect(),
            )),
            Value::Object(map) => {
                let rational = (
                    map.get("numerator").and_then(Value::as_i64),
                    map.get("denominator").and_then(Value::as_i64),
                );
                Some(match rational {
                    (Some(numerator), Some(denominator)) => {
                        Self::Rational(Rational::new(numerator, denominator))
                    }
                    _ => Self::Opaque(OpaqueData {
                        bytes: map
                            .get("bytes")
                            .and_then(Value::as_u64)
                            .and_then(|b| usize::try_from(b).ok()),
                    }),
                })
            }
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// An enumeration code: integers, plus rationals and decimals with no fraction.
    pub fn as_code(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            Self::Rational(_) | Self::Decimal(_) => {
                let value = self.as_f64()?;
                (value.fract() == 0.0 && value.abs() <= i64::MAX as f64).then_some(value as i64)
            }
            _ => None,
        }
    }

    /// Numeric view of integers, rationals and decimals.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Rational(r) => r.to_f64(),
            Self::Decimal(d) => d.is_finite().then_some(*d),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[RawValue]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Integers, rationals, decimals and text. Sequences and binary data are not scalar.
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Integer(_) | Self::Rational(_) | Self::Decimal(_) | Self::Text(_)
        )
    }
}

fn parse_binary_placeholder(s: &str) -> Option<RawValue> {
    let caps = BINARY_PLACEHOLDER.captures(s)?;
    let bytes = caps.get(1)?.as_str().parse::<usize>().ok();
    Some(RawValue::Opaque(OpaqueData { bytes }))
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<Rational> for RawValue {
    fn from(value: Rational) -> Self {
        Self::Rational(value)
    }
}

impl<T: Into<RawValue>> From<Vec<T>> for RawValue {
    fn from(values: Vec<T>) -> Self {
        Self::Sequence(values.into_iter().map(Into::into).collect())
    }
}

/// The flat tag dictionary for one image, keyed by tag name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawTags(BTreeMap<String, RawValue>);

impl RawTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a decoder's JSON object. Tags with a `null` value are treated as absent.
    pub fn from_json(exif: &Value) -> Result<Self, MetadataError> {
        let object = exif
            .as_object()
            .ok_or_else(|| MetadataError::NotAnObject("exif".to_string()))?;
        Ok(object
            .iter()
            .filter_map(|(key, value)| RawValue::from_json(value).map(|v| (key.clone(), v)))
            .collect())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<RawValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn value(&self, key: &str) -> Option<&RawValue> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Non-blank text. Blank strings count as absent.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.value(key)
            .and_then(RawValue::as_text)
            .filter(|s| !s.trim().is_empty())
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.value(key).and_then(RawValue::as_f64)
    }

    pub fn integer(&self, key: &str) -> Option<i64> {
        self.value(key).and_then(RawValue::as_integer)
    }

    pub fn sequence(&self, key: &str) -> Option<&[RawValue]> {
        self.value(key).and_then(RawValue::as_sequence)
    }

    /// A scalar value that is not blank text.
    pub fn scalar(&self, key: &str) -> Option<&RawValue> {
        self.value(key)
            .filter(|v| v.is_scalar())
            .filter(|v| v.as_text().is_none_or(|s| !s.trim().is_empty()))
    }
}

impl FromIterator<(String, RawValue)> for RawTags {
    fn from_iter<I: IntoIterator<Item = (String, RawValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
