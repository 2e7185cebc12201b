use crate::convert::format_number;
use crate::features::basic::BasicInfo;
use crate::features::camera::CameraInfo;
use crate::features::gps::GpsInfo;
use crate::features::settings::SettingsInfo;
use crate::raw::{RawTags, RawValue};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A rendered field value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DisplayValue {
    Text(String),
    Number(serde_json::Number),
}

impl DisplayValue {
    /// Integral floats become integer numbers so `72/1` renders as `72`.
    pub fn from_f64(value: f64) -> Option<Self> {
        if value.fract() == 0.0 && value.abs() < 1e15 {
            return Some(Self::Number((value as i64).into()));
        }
        serde_json::Number::from_f64(value).map(Self::Number)
    }

    /// Scalar raw values only; sequences and binary data have no display form.
    pub fn from_raw(value: &RawValue) -> Option<Self> {
        match value {
            RawValue::Integer(i) => Some(Self::Number((*i).into())),
            RawValue::Rational(_) | RawValue::Decimal(_) => value.as_f64().and_then(Self::from_f64),
            RawValue::Text(s) => Some(Self::Text(s.clone())),
            RawValue::Sequence(_) | RawValue::Opaque(_) => None,
        }
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => match n.as_f64() {
                Some(v) if !n.is_i64() && !n.is_u64() => f.write_str(&format_number(v)),
                _ => write!(f, "{n}"),
            },
        }
    }
}

impl From<String> for DisplayValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for DisplayValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<i64> for DisplayValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

/// The five output groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Basic,
    Camera,
    Settings,
    Gps,
    Other,
}

/// One labelled field, flattened out of its category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub category: Category,
    pub label: String,
    pub value: Option<DisplayValue>,
}

impl Row {
    /// Case-insensitive substring match on the label or the rendered value.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.label.to_lowercase().contains(&query)
            || self
                .value
                .as_ref()
                .is_some_and(|v| v.to_string().to_lowercase().contains(&query))
    }
}

/// Everything extracted for one image, plus the tags it was extracted from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateMetadata {
    pub basic: BasicInfo,
    pub camera: CameraInfo,
    pub settings: SettingsInfo,
    pub gps: GpsInfo,
    /// Unrecognised scalar tags, passed through.
    pub other: BTreeMap<String, DisplayValue>,
    pub raw: RawTags,
}

impl AggregateMetadata {
    /// All fields in display order: basic, camera, settings, gps, other.
    pub fn rows(&self) -> Vec<Row> {
        labelled(Category::Basic, self.basic.rows())
            .chain(labelled(Category::Camera, self.camera.rows()))
            .chain(labelled(Category::Settings, self.settings.rows()))
            .chain(labelled(Category::Gps, self.gps.rows()))
            .chain(self.other.iter().map(|(key, value)| Row {
                category: Category::Other,
                label: key.clone(),
                value: Some(value.clone()),
            }))
            .collect()
    }

    /// Rows whose label or value contains `query`. An empty query keeps every row.
    pub fn search(&self, query: &str) -> Vec<Row> {
        let query = query.trim();
        self.rows()
            .into_iter()
            .filter(|row| query.is_empty() || row.matches(query))
            .collect()
    }
}

fn labelled<'a>(
    category: Category,
    fields: Vec<(&'static str, Option<&'a DisplayValue>)>,
) -> impl Iterator<Item = Row> + 'a {
    fields.into_iter().map(move |(label, value)| Row {
        category,
        label: label.to_string(),
        value: value.cloned(),
    })
}

/// Result of normalizing one image.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeResult {
    pub metadata: AggregateMetadata,
    pub has_metadata: bool,
}
