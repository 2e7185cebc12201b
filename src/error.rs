use thiserror::Error;

/// The primary error type for the exif-normalizer crate.
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Invalid metadata input: {0}")]
    Metadata(#[from] crate::features::error::MetadataError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // --- Admission Errors ---
    #[error("Unsupported file type for {name}: '{media_type}' (expected JPEG, PNG or TIFF)")]
    UnsupportedFileType { name: String, media_type: String },

    #[error("File {name} is {size_bytes} bytes, above the limit of {limit_bytes} bytes")]
    FileTooLarge {
        name: String,
        size_bytes: u64,
        limit_bytes: u64,
    },
}
