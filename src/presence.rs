//! Decides whether an image carries any metadata worth showing.

use crate::structs::{AggregateMetadata, DisplayValue};

fn any_set(rows: &[(&'static str, Option<&DisplayValue>)]) -> bool {
    rows.iter().any(|(_, value)| value.is_some())
}

/// True when any camera, settings or GPS field is set, or any unknown tag passed through.
///
/// Basic file facts always have values and do not count.
pub fn has_metadata(metadata: &AggregateMetadata) -> bool {
    any_set(&metadata.camera.rows())
        || any_set(&metadata.settings.rows())
        || any_set(&metadata.gps.rows())
        || !metadata.other.is_empty()
}

/// Explanation to show when [`has_metadata`] is false.
pub fn absence_note(media_type: &str) -> String {
    let mut note = String::from("This image does not contain any Exif metadata.");
    if media_type.eq_ignore_ascii_case("image/png") {
        note.push_str("\n\nPNG files usually do not store Exif metadata.");
    }
    note
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::basic::FileInfo;
    use crate::normalizer::Normalizer;
    use crate::raw::{OpaqueData, RawTags, RawValue};

    fn file() -> FileInfo {
        FileInfo {
            name: "screenshot.png".to_string(),
            size_bytes: 2048,
            media_type: "image/png".to_string(),
            width: 800,
            height: 600,
        }
    }

    #[test]
    fn test_basic_only_is_not_metadata() {
        let mut tags = RawTags::new();
        tags.insert("DateTime", "2024:01:01 00:00:00");
        let result = Normalizer::default().normalize(&file(), tags);
        assert!(result.metadata.basic.date_taken.is_some());
        assert!(!has_metadata(&result.metadata));
    }

    #[test]
    fn test_one_gps_field_is_metadata() {
        let mut tags = RawTags::new();
        tags.insert("GPSAltitude", 10_i64);
        let result = Normalizer::default().normalize(&file(), tags);
        assert!(has_metadata(&result.metadata));
    }

    #[test]
    fn test_unknown_scalar_tag_is_metadata() {
        let mut tags = RawTags::new();
        tags.insert("Orientation", 1_i64);
        let result = Normalizer::default().normalize(&file(), tags);
        assert!(has_metadata(&result.metadata));
    }

    #[test]
    fn test_thumbnail_alone_is_not_metadata() {
        let mut tags = RawTags::new();
        tags.insert("thumbnail", RawValue::Opaque(OpaqueData { bytes: Some(9000) }));
        let result = Normalizer::default().normalize(&file(), tags);
        assert!(!has_metadata(&result.metadata));
    }

    #[test]
    fn test_empty_lens_specification_is_not_metadata() {
        let mut tags = RawTags::new();
        tags.insert("LensSpecification", RawValue::Sequence(Vec::new()));
        let result = Normalizer::default().normalize(&file(), tags);
        assert!(result.metadata.camera.lens_specification.is_none());
        assert!(!has_metadata(&result.metadata));
    }

    #[test]
    fn test_absence_note_mentions_png() {
        assert!(absence_note("image/png").contains("PNG"));
        assert!(!absence_note("image/jpeg").contains("PNG"));
    }
}
