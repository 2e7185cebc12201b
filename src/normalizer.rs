use crate::NormalizeError;
use crate::features::basic::{FileInfo, get_basic_info};
use crate::features::camera::get_camera_info;
use crate::features::gps::get_gps_info;
use crate::features::other::get_other_info;
use crate::features::settings::get_settings_info;
use crate::presence::has_metadata;
use crate::raw::RawTags;
use crate::structs::{AggregateMetadata, NormalizeResult};
use bon::bon;
use rayon::prelude::*;
use serde_json::Value;

pub const DEFAULT_MAP_URL_BASE: &str = "https://www.google.com/maps";
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

const SUPPORTED_MEDIA_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/tiff"];
const SUPPORTED_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".tif", ".tiff"];

/// Turns decoded tag dictionaries into categorized, display-ready metadata.
///
/// Holds configuration only, so one instance can be shared across threads and
/// reused for any number of images.
///
/// ```rust
/// # use exif_normalizer::Normalizer;
/// let normalizer = Normalizer::builder()
///     .map_url_base("https://www.google.com/maps")
///     .max_file_size_bytes(20 * 1024 * 1024)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct Normalizer {
    map_url_base: String,
    max_file_size_bytes: u64,
}

#[bon]
impl Normalizer {
    /// Constructs a `Normalizer` via a builder pattern.
    ///
    /// # Builder Arguments
    ///
    /// * `map_url_base: String` - (Default: `https://www.google.com/maps`) Base of the map link; `?q=<lat>,<lon>` is appended.
    /// * `max_file_size_bytes: u64` - (Default: 10 MiB) Largest file [`Normalizer::check_file`] accepts.
    #[builder]
    pub fn new(
        #[builder(into, default = DEFAULT_MAP_URL_BASE.to_string())] map_url_base: String,
        #[builder(default = DEFAULT_MAX_FILE_SIZE_BYTES)] max_file_size_bytes: u64,
    ) -> Self {
        Self {
            map_url_base,
            max_file_size_bytes,
        }
    }

    /// Normalizes one image's tags.
    ///
    /// Never fails: missing, malformed or unknown values end up as absent fields
    /// or pass through unchanged. Identical input always gives identical output.
    pub fn normalize(&self, file: &FileInfo, tags: RawTags) -> NormalizeResult {
        log::trace!("Normalizing {} ({} tags)", file.name, tags.len());

        let metadata = AggregateMetadata {
            basic: get_basic_info(file, &tags),
            camera: get_camera_info(&tags),
            settings: get_settings_info(&tags),
            gps: get_gps_info(&tags, &self.map_url_base),
            other: get_other_info(&tags),
            raw: tags,
        };
        let has_metadata = has_metadata(&metadata);

        NormalizeResult {
            metadata,
            has_metadata,
        }
    }

    /// Normalizes from JSON: `file` holds the file facts (see [`FileInfo::from_json`]),
    /// `exif` is the decoder's flat tag object.
    ///
    /// # Errors
    ///
    /// * [`NormalizeError::Metadata`]: `file` is missing a required field, or either input is not an object.
    pub fn normalize_json(
        &self,
        file: &Value,
        exif: &Value,
    ) -> Result<NormalizeResult, NormalizeError> {
        let file = FileInfo::from_json(file)?;
        let tags = RawTags::from_json(exif)?;
        Ok(self.normalize(&file, tags))
    }

    /// Normalizes many images in parallel. Output order matches input order.
    pub fn normalize_batch(&self, items: Vec<(FileInfo, RawTags)>) -> Vec<NormalizeResult> {
        items
            .into_par_iter()
            .map(|(file, tags)| self.normalize(&file, tags))
            .collect()
    }

    /// Checks that a file is a supported image type and within the size limit.
    ///
    /// A matching media type or a matching extension is enough.
    ///
    /// # Errors
    ///
    /// * [`NormalizeError::UnsupportedFileType`]: neither the media type nor the extension is JPEG, PNG or TIFF.
    /// * [`NormalizeError::FileTooLarge`]: the file exceeds `max_file_size_bytes`.
    pub fn check_file(&self, file: &FileInfo) -> Result<(), NormalizeError> {
        let media_type = file.media_type.to_lowercase();
        let name = file.name.to_lowercase();
        let supported = SUPPORTED_MEDIA_TYPES.contains(&media_type.as_str())
            || SUPPORTED_EXTENSIONS.iter().any(|ext| name.ends_with(ext));
        if !supported {
            return Err(NormalizeError::UnsupportedFileType {
                name: file.name.clone(),
                media_type: file.media_type.clone(),
            });
        }
        if file.size_bytes > self.max_file_size_bytes {
            return Err(NormalizeError::FileTooLarge {
                name: file.name.clone(),
                size_bytes: file.size_bytes,
                limit_bytes: self.max_file_size_bytes,
            });
        }
        Ok(())
    }

    pub fn map_url_base(&self) -> &str {
        &self.map_url_base
    }

    pub const fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_bytes
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::builder().build()
    }
}
