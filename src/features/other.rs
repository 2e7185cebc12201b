use crate::raw::RawTags;
use crate::structs::DisplayValue;
use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

/// Tags consumed by the fixed categories, plus thumbnail blobs.
pub static KNOWN_TAGS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "DateTime",
        "DateTimeOriginal",
        "DateTimeDigitized",
        "Make",
        "Model",
        "LensMake",
        "LensModel",
        "LensSpecification",
        "SerialNumber",
        "InternalSerialNumber",
        "ISOSpeedRatings",
        "PhotographicSensitivity",
        "ExposureTime",
        "FNumber",
        "FocalLength",
        "FocalLengthIn35mmFilm",
        "ExposureBiasValue",
        "MeteringMode",
        "ExposureProgram",
        "WhiteBalance",
        "Flash",
        "FlashMode",
        "ColorSpace",
        "DigitalZoomRatio",
        "GPSLatitude",
        "GPSLongitude",
        "GPSLatitudeRef",
        "GPSLongitudeRef",
        "GPSAltitude",
        "GPSAltitudeRef",
        "GPSImgDirection",
        "GPSDateStamp",
        "thumbnail",
        "Thumbnail",
    ])
});

pub fn is_known_tag(name: &str) -> bool {
    KNOWN_TAGS.contains(name)
}

/// Unknown tags with scalar values. Sequences and binary data are left out.
pub fn get_other_info(tags: &RawTags) -> BTreeMap<String, DisplayValue> {
    tags.iter()
        .filter(|(name, _)| !is_known_tag(name))
        .filter_map(|(name, value)| {
            if !value.is_scalar() {
                log::trace!("Leaving non-scalar tag {name} out of the other category");
                return None;
            }
            DisplayValue::from_raw(value).map(|v| (name.to_string(), v))
        })
        .collect()
}
