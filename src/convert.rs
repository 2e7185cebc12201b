//! Pure unit conversions and display formatting.

use crate::raw::RawValue;
use crate::structs::DisplayValue;

/// Hemisphere reference attached to a GPS coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Parses `N`, `S`, `E` or `W` (case-insensitive, surrounding whitespace ignored).
    pub fn from_ref(reference: &str) -> Option<Self> {
        match reference.trim().to_ascii_uppercase().as_str() {
            "N" => Some(Self::North),
            "S" => Some(Self::South),
            "E" => Some(Self::East),
            "W" => Some(Self::West),
            _ => None,
        }
    }

    pub const fn sign(self) -> f64 {
        match self {
            Self::North | Self::East => 1.0,
            Self::South | Self::West => -1.0,
        }
    }
}

/// Degrees, minutes and seconds to signed decimal degrees.
///
/// Returns `None` unless `dms` has exactly three numeric components.
pub fn dms_to_decimal(dms: &[RawValue], hemisphere: Hemisphere) -> Option<f64> {
    let [degrees, minutes, seconds] = dms else {
        return None;
    };
    let degrees = degrees.as_f64()?;
    let minutes = minutes.as_f64()?;
    let seconds = seconds.as_f64()?;
    let decimal = degrees + minutes / 60.0 + seconds / 3600.0;
    decimal
        .is_finite()
        .then(|| decimal * hemisphere.sign())
}

/// Six fixed decimals, never `-0.000000`.
pub fn format_coordinate(decimal: f64) -> String {
    let formatted = format!("{decimal:.6}");
    match formatted.strip_prefix('-') {
        Some(magnitude) if magnitude.bytes().all(|b| b == b'0' || b == b'.') => {
            magnitude.to_string()
        }
        _ => formatted,
    }
}

/// `"2.5s"` for long exposures, `"1/250s"` for fractions of a second.
///
/// Zero, negative and non-finite values have no sensible rendering.
pub fn format_exposure_time(seconds: f64) -> Option<String> {
    if !seconds.is_finite() || seconds <= 0.0 {
        return None;
    }
    if seconds >= 1.0 {
        return Some(format!("{}s", format_number(seconds)));
    }
    let denominator = (1.0 / seconds).round();
    if !denominator.is_finite() {
        return None;
    }
    Some(format!("1/{}s", format_number(denominator)))
}

pub fn format_file_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.2} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    }
}

/// Joins a lens specification sequence with `", "`; scalars pass through.
///
/// Components that cannot be rendered (e.g. `0/0` for an unknown aperture) show as `n/a`.
pub fn format_lens_spec(spec: &RawValue) -> Option<DisplayValue> {
    match spec {
        RawValue::Sequence(items) if items.is_empty() => None,
        RawValue::Sequence(items) => Some(DisplayValue::Text(
            items
                .iter()
                .map(|item| {
                    DisplayValue::from_raw(item).map_or_else(|| "n/a".to_string(), |v| v.to_string())
                })
                .collect::<Vec<_>>()
                .join(", "),
        )),
        other => DisplayValue::from_raw(other),
    }
}

/// Shortest decimal rendering; integral values print without a fraction.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
