use crate::convert::format_file_size;
use crate::features::error::MetadataError;
use crate::raw::RawTags;
use crate::structs::DisplayValue;
use crate::time::parse_exif_datetime;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Facts about the file itself, supplied alongside the decoded tags.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub name: String,
    pub size_bytes: u64,
    /// Declared media type, e.g. `image/jpeg`. May be empty when unknown.
    pub media_type: String,
    pub width: u64,
    pub height: u64,
}

fn get_required_u64(file: &Value, key: &str) -> Result<u64, MetadataError> {
    file.get(key)
        .and_then(Value::as_u64)
        .ok_or_else(|| MetadataError::MissingRequiredField(key.to_string()))
}

fn get_required_string(file: &Value, key: &str) -> Result<String, MetadataError> {
    file.get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| MetadataError::MissingRequiredField(key.to_string()))
}

impl FileInfo {
    /// Reads `FileName`, `FileSize`, `MIMEType`, `ImageWidth` and `ImageHeight`.
    pub fn from_json(file: &Value) -> Result<Self, MetadataError> {
        if !file.is_object() {
            return Err(MetadataError::NotAnObject("file".to_string()));
        }
        Ok(Self {
            name: get_required_string(file, "FileName")?,
            size_bytes: get_required_u64(file, "FileSize")?,
            media_type: get_required_string(file, "MIMEType")?,
            width: get_required_u64(file, "ImageWidth")?,
            height: get_required_u64(file, "ImageHeight")?,
        })
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    pub file_name: Option<DisplayValue>,
    pub file_size: Option<DisplayValue>,
    pub media_type: Option<DisplayValue>,
    pub dimensions: Option<DisplayValue>,
    /// `DateTimeOriginal`, then `DateTimeDigitized`, then `DateTime`.
    pub date_taken: Option<DisplayValue>,
    pub date_time: Option<DisplayValue>,
    pub date_time_original: Option<DisplayValue>,
}

impl BasicInfo {
    pub fn rows(&self) -> Vec<(&'static str, Option<&DisplayValue>)> {
        vec![
            ("File name", self.file_name.as_ref()),
            ("File size", self.file_size.as_ref()),
            ("Media type", self.media_type.as_ref()),
            ("Dimensions", self.dimensions.as_ref()),
            ("Date taken", self.date_taken.as_ref()),
            ("Date/time", self.date_time.as_ref()),
            ("Date/time original", self.date_time_original.as_ref()),
        ]
    }

    /// The capture timestamp, parsed. `None` when absent or not in an Exif date format.
    pub fn captured_at(&self) -> Option<NaiveDateTime> {
        match self.date_taken.as_ref()? {
            DisplayValue::Text(s) => parse_exif_datetime(s),
            DisplayValue::Number(_) => None,
        }
    }
}

fn text(tags: &RawTags, key: &str) -> Option<DisplayValue> {
    tags.text(key).map(DisplayValue::from)
}

pub fn get_basic_info(file: &FileInfo, tags: &RawTags) -> BasicInfo {
    let date_taken = ["DateTimeOriginal", "DateTimeDigitized", "DateTime"]
        .into_iter()
        .find_map(|key| text(tags, key));

    BasicInfo {
        file_name: Some(DisplayValue::from(file.name.as_str())),
        file_size: Some(DisplayValue::from(format_file_size(file.size_bytes))),
        media_type: Some(file.media_type.trim())
            .filter(|s| !s.is_empty())
            .map(DisplayValue::from),
        dimensions: Some(DisplayValue::from(format!(
            "{} x {} px",
            file.width, file.height
        ))),
        date_taken,
        date_time: text(tags, "DateTime"),
        date_time_original: text(tags, "DateTimeOriginal"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn file() -> FileInfo {
        FileInfo {
            name: "IMG_0001.jpg".to_string(),
            size_bytes: 5 * 1024 * 1024,
            media_type: "image/jpeg".to_string(),
            width: 4000,
            height: 3000,
        }
    }

    #[test]
    fn test_basic_info_from_file_facts() {
        let basic = get_basic_info(&file(), &RawTags::new());
        assert_eq!(basic.file_name, Some(DisplayValue::from("IMG_0001.jpg")));
        assert_eq!(basic.file_size, Some(DisplayValue::from("5.00 MB")));
        assert_eq!(basic.media_type, Some(DisplayValue::from("image/jpeg")));
        assert_eq!(basic.dimensions, Some(DisplayValue::from("4000 x 3000 px")));
        assert!(basic.date_taken.is_none());
        assert!(basic.date_time.is_none());
        assert!(basic.date_time_original.is_none());
    }

    #[test]
    fn test_date_taken_priority() {
        let mut tags = RawTags::new();
        tags.insert("DateTime", "2024:01:03 10:00:00");
        let basic = get_basic_info(&file(), &tags);
        assert_eq!(basic.date_taken, Some(DisplayValue::from("2024:01:03 10:00:00")));

        tags.insert("DateTimeDigitized", "2024:01:02 10:00:00");
        let basic = get_basic_info(&file(), &tags);
        assert_eq!(basic.date_taken, Some(DisplayValue::from("2024:01:02 10:00:00")));

        tags.insert("DateTimeOriginal", "2024:01:01 10:00:00");
        let basic = get_basic_info(&file(), &tags);
        assert_eq!(basic.date_taken, Some(DisplayValue::from("2024:01:01 10:00:00")));
        assert_eq!(basic.date_time, Some(DisplayValue::from("2024:01:03 10:00:00")));
        assert_eq!(
            basic.date_time_original,
            Some(DisplayValue::from("2024:01:01 10:00:00"))
        );
    }

    #[test]
    fn test_blank_original_falls_through() {
        let mut tags = RawTags::new();
        tags.insert("DateTimeOriginal", "");
        tags.insert("DateTime", "2024:01:03 10:00:00");
        let basic = get_basic_info(&file(), &tags);
        assert_eq!(basic.date_taken, Some(DisplayValue::from("2024:01:03 10:00:00")));
        assert!(basic.date_time_original.is_none());
    }

    #[test]
    fn test_empty_media_type_is_absent() {
        let mut file = file();
        file.media_type = String::new();
        let basic = get_basic_info(&file, &RawTags::new());
        assert!(basic.media_type.is_none());
    }

    #[test]
    fn test_captured_at() {
        let mut tags = RawTags::new();
        tags.insert("DateTimeOriginal", "2023:07:14 18:32:05");
        let basic = get_basic_info(&file(), &tags);
        let expected = NaiveDate::from_ymd_opt(2023, 7, 14)
            .and_then(|d| d.and_hms_opt(18, 32, 5));
        assert_eq!(basic.captured_at(), expected);

        let mut tags = RawTags::new();
        tags.insert("DateTimeOriginal", "sometime last summer");
        assert!(get_basic_info(&file(), &tags).captured_at().is_none());
    }

    #[test]
    fn test_file_info_from_json() {
        let info = FileInfo::from_json(&json!({
            "FileName": "IMG_0001.jpg",
            "FileSize": 5242880,
            "MIMEType": "image/jpeg",
            "ImageWidth": 4000,
            "ImageHeight": 3000
        }))
        .unwrap();
        assert_eq!(info, file());
    }

    #[test]
    fn test_file_info_fails_when_required_field_is_missing() {
        let missing_height = json!({
            "FileName": "a.jpg", "FileSize": 1, "MIMEType": "image/jpeg", "ImageWidth": 10
        });
        assert!(
            matches!(FileInfo::from_json(&missing_height), Err(MetadataError::MissingRequiredField(field)) if field == "ImageHeight"),
            "Should fail with specific error for missing ImageHeight"
        );

        assert_eq!(
            FileInfo::from_json(&json!("a.jpg")),
            Err(MetadataError::NotAnObject("file".to_string()))
        );
    }
}
