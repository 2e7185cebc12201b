use crate::convert::{format_exposure_time, format_number};
use crate::enums::{Resolver, resolve_flash};
use crate::raw::RawTags;
use crate::structs::DisplayValue;
use serde::Serialize;

/// Exposure and capture settings.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsInfo {
    pub iso: Option<DisplayValue>,
    pub shutter: Option<DisplayValue>,
    pub aperture: Option<DisplayValue>,
    pub focal_length: Option<DisplayValue>,
    #[serde(rename = "focalLength35mm")]
    pub focal_length_35mm: Option<DisplayValue>,
    pub exposure_bias: Option<DisplayValue>,
    pub metering_mode: Option<DisplayValue>,
    pub exposure_program: Option<DisplayValue>,
    pub white_balance: Option<DisplayValue>,
    pub flash: Option<DisplayValue>,
    /// Maker-specific flash mode code, not resolved.
    pub flash_mode: Option<DisplayValue>,
    pub color_space: Option<DisplayValue>,
    pub digital_zoom_ratio: Option<DisplayValue>,
}

impl SettingsInfo {
    pub fn rows(&self) -> Vec<(&'static str, Option<&DisplayValue>)> {
        vec![
            ("ISO", self.iso.as_ref()),
            ("Shutter speed", self.shutter.as_ref()),
            ("Aperture", self.aperture.as_ref()),
            ("Focal length", self.focal_length.as_ref()),
            ("Focal length (35mm)", self.focal_length_35mm.as_ref()),
            ("Exposure bias", self.exposure_bias.as_ref()),
            ("Metering mode", self.metering_mode.as_ref()),
            ("Exposure program", self.exposure_program.as_ref()),
            ("White balance", self.white_balance.as_ref()),
            ("Flash", self.flash.as_ref()),
            ("Flash mode", self.flash_mode.as_ref()),
            ("Color space", self.color_space.as_ref()),
            ("Digital zoom ratio", self.digital_zoom_ratio.as_ref()),
        ]
    }
}

fn scalar(tags: &RawTags, key: &str) -> Option<DisplayValue> {
    tags.scalar(key).and_then(DisplayValue::from_raw)
}

/// Renders a numeric tag with a prefix and suffix, e.g. `F2.8` or `50mm`.
fn affixed(tags: &RawTags, key: &str, prefix: &str, suffix: &str) -> Option<DisplayValue> {
    tags.number(key)
        .map(|n| DisplayValue::from(format!("{prefix}{}{suffix}", format_number(n))))
}

pub fn get_settings_info(tags: &RawTags) -> SettingsInfo {
    let shutter = tags.number("ExposureTime").and_then(|t| {
        let formatted = format_exposure_time(t);
        if formatted.is_none() {
            log::debug!("ExposureTime {t} cannot be rendered, treating it as absent");
        }
        formatted.map(DisplayValue::from)
    });

    SettingsInfo {
        iso: scalar(tags, "ISOSpeedRatings").or_else(|| scalar(tags, "PhotographicSensitivity")),
        shutter,
        aperture: affixed(tags, "FNumber", "F", ""),
        focal_length: affixed(tags, "FocalLength", "", "mm"),
        focal_length_35mm: affixed(tags, "FocalLengthIn35mmFilm", "", "mm"),
        exposure_bias: affixed(tags, "ExposureBiasValue", "", " EV"),
        metering_mode: Resolver::MeteringMode.resolve(tags.scalar("MeteringMode")),
        exposure_program: Resolver::ExposureProgram.resolve(tags.scalar("ExposureProgram")),
        white_balance: Resolver::WhiteBalance.resolve(tags.scalar("WhiteBalance")),
        flash: resolve_flash(tags.scalar("Flash")),
        flash_mode: scalar(tags, "FlashMode"),
        color_space: Resolver::ColorSpace.resolve(tags.scalar("ColorSpace")),
        // A ratio of 0 means digital zoom was not used.
        digital_zoom_ratio: tags
            .scalar("DigitalZoomRatio")
            .filter(|v| v.as_f64() != Some(0.0))
            .and_then(DisplayValue::from_raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::Rational;
    use serde_json::json;

    #[test]
    fn test_get_settings_info_with_full_data() {
        let tags = RawTags::from_json(&json!({
            "ISOSpeedRatings": 100,
            "ExposureTime": {"numerator": 1, "denominator": 250},
            "FNumber": {"numerator": 28, "denominator": 10},
            "FocalLength": 50,
            "FocalLengthIn35mmFilm": 80,
            "ExposureBiasValue": -0.7,
            "MeteringMode": 5,
            "ExposureProgram": 2,
            "WhiteBalance": 0,
            "Flash": 16,
            "FlashMode": 0,
            "ColorSpace": 1,
            "DigitalZoomRatio": 1.5
        }))
        .unwrap();

        let settings = get_settings_info(&tags);
        assert_eq!(settings.iso, Some(DisplayValue::from(100)));
        assert_eq!(settings.shutter, Some(DisplayValue::from("1/250s")));
        assert_eq!(settings.aperture, Some(DisplayValue::from("F2.8")));
        assert_eq!(settings.focal_length, Some(DisplayValue::from("50mm")));
        assert_eq!(settings.focal_length_35mm, Some(DisplayValue::from("80mm")));
        assert_eq!(settings.exposure_bias, Some(DisplayValue::from("-0.7 EV")));
        assert_eq!(settings.metering_mode, Some(DisplayValue::from("Pattern")));
        assert_eq!(
            settings.exposure_program,
            Some(DisplayValue::from("Normal program"))
        );
        assert_eq!(settings.white_balance, Some(DisplayValue::from("Auto")));
        assert_eq!(settings.flash, Some(DisplayValue::from("not fired")));
        assert_eq!(settings.flash_mode, Some(DisplayValue::from(0)));
        assert_eq!(settings.color_space, Some(DisplayValue::from("sRGB")));
        assert_eq!(
            settings.digital_zoom_ratio.map(|v| v.to_string()),
            Some("1.5".to_string())
        );
    }

    #[test]
    fn test_iso_fallback() {
        let mut tags = RawTags::new();
        tags.insert("PhotographicSensitivity", 400_i64);
        assert_eq!(get_settings_info(&tags).iso, Some(DisplayValue::from(400)));

        tags.insert("ISOSpeedRatings", 200_i64);
        assert_eq!(get_settings_info(&tags).iso, Some(DisplayValue::from(200)));
    }

    #[test]
    fn test_zero_exposure_time_is_absent() {
        let mut tags = RawTags::new();
        tags.insert("ExposureTime", 0.0);
        assert!(get_settings_info(&tags).shutter.is_none());

        tags.insert("ExposureTime", Rational::new(1, 0));
        assert!(get_settings_info(&tags).shutter.is_none());
    }

    #[test]
    fn test_long_exposure() {
        let mut tags = RawTags::new();
        tags.insert("ExposureTime", Rational::new(30, 1));
        assert_eq!(get_settings_info(&tags).shutter, Some(DisplayValue::from("30s")));
    }

    #[test]
    fn test_zero_bias_is_kept_and_zero_zoom_is_not() {
        let mut tags = RawTags::new();
        tags.insert("ExposureBiasValue", Rational::new(0, 1));
        tags.insert("DigitalZoomRatio", Rational::new(0, 1));
        let settings = get_settings_info(&tags);
        assert_eq!(settings.exposure_bias, Some(DisplayValue::from("0 EV")));
        assert!(settings.digital_zoom_ratio.is_none());
    }

    #[test]
    fn test_unknown_metering_mode_passes_through() {
        let mut tags = RawTags::new();
        tags.insert("MeteringMode", 7_i64);
        assert_eq!(
            get_settings_info(&tags).metering_mode,
            Some(DisplayValue::from(7))
        );
    }

    #[test]
    fn test_flash_fired() {
        let mut tags = RawTags::new();
        tags.insert("Flash", 0x19_i64);
        assert_eq!(get_settings_info(&tags).flash, Some(DisplayValue::from("fired")));
    }
}
