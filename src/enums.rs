//! Code-to-label tables for enumerated Exif fields.
//!
//! Unknown codes are never an error: they come back as the raw code so newer
//! camera firmware still shows something meaningful.

use crate::raw::RawValue;
use crate::structs::DisplayValue;

/// An enumerated Exif field with a fixed label table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolver {
    MeteringMode,
    ExposureProgram,
    WhiteBalance,
    ColorSpace,
}

impl Resolver {
    /// Looks up `code` in this field's table.
    pub const fn label(self, code: i64) -> Option<&'static str> {
        match self {
            Self::MeteringMode => match code {
                0 => Some("Unknown"),
                1 => Some("Average"),
                2 => Some("Center-weighted average"),
                3 => Some("Spot"),
                4 => Some("Multi-spot"),
                5 => Some("Pattern"),
                6 => Some("Partial"),
                255 => Some("Other"),
                _ => None,
            },
            Self::ExposureProgram => match code {
                0 => Some("Not defined"),
                1 => Some("Manual"),
                2 => Some("Normal program"),
                3 => Some("Aperture priority"),
                4 => Some("Shutter priority"),
                5 => Some("Creative program"),
                6 => Some("Action program"),
                7 => Some("Portrait mode"),
                8 => Some("Landscape mode"),
                _ => None,
            },
            Self::WhiteBalance => match code {
                0 => Some("Auto"),
                1 => Some("Manual"),
                _ => None,
            },
            Self::ColorSpace => match code {
                1 => Some("sRGB"),
                2 => Some("Adobe RGB"),
                65535 => Some("Uncalibrated"),
                _ => None,
            },
        }
    }

    /// Absent stays absent, known codes get their label, anything else passes through.
    pub fn resolve(self, raw: Option<&RawValue>) -> Option<DisplayValue> {
        let raw = raw?;
        match raw.as_code().and_then(|code| self.label(code)) {
            Some(label) => Some(DisplayValue::from(label)),
            None => {
                log::debug!("{:?}: no label for {:?}, passing it through", self, raw);
                DisplayValue::from_raw(raw)
            }
        }
    }
}

/// Decodes only bit 0 of the flash bitmask. Non-numeric values pass through.
pub fn resolve_flash(raw: Option<&RawValue>) -> Option<DisplayValue> {
    let raw = raw?;
    match raw.as_code() {
        Some(bits) if bits & 0x01 != 0 => Some(DisplayValue::from("fired")),
        Some(_) => Some(DisplayValue::from("not fired")),
        None => DisplayValue::from_raw(raw),
    }
}

/// GPS altitude reference: `0` above sea level, `1` below. Anything else is absent.
///
/// Decoders differ in how they hand this byte over, so the single-character
/// strings `"0"` and `"1"` are accepted as well.
pub fn resolve_altitude_ref(raw: Option<&RawValue>) -> Option<DisplayValue> {
    let raw = raw?;
    let code = match raw.as_text() {
        Some(s) => match s.trim() {
            "0" => 0,
            "1" => 1,
            _ => return None,
        },
        None => raw.as_code()?,
    };
    match code {
        0 => Some(DisplayValue::from("Above sea level")),
        1 => Some(DisplayValue::from("Below sea level")),
        _ => None,
    }
}
