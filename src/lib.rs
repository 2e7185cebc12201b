//! # Exif Normalizer
//!
//! Turn a flat dictionary of decoded Exif tags into categorized, display-ready metadata.
//!
//! The decoding of JPEG/TIFF/PNG containers happens elsewhere (exiftool, kamadak-exif,
//! exif-js...). This crate takes the tag dictionary such a decoder produces and turns it
//! into five fixed-shape categories that a UI or log can show directly.
//!
//! ## Key Features
//!
//! - **Basic**: File name, formatted size, media type, dimensions and the capture timestamp.
//! - **Camera**: Maker, model, lens and serial number.
//! - **Settings**: ISO, shutter speed as `1/250s`, aperture as `F2.8`, focal lengths, and
//!   metering mode, exposure program, white balance, flash and color space resolved to labels.
//! - **GPS**: Degrees-minutes-seconds converted to signed decimal degrees, altitude, direction
//!   and a map link.
//! - **Other**: Every unrecognised scalar tag, passed through as-is.
//! - **Presence**: Whether anything beyond basic file facts was found at all.
//!
//! ## Usage
//!
//! ```rust
//! use exif_normalizer::{Normalizer, NormalizeError};
//! use serde_json::json;
//!
//! fn main() -> Result<(), NormalizeError> {
//!     let file = json!({
//!         "FileName": "tokyo.jpg",
//!         "FileSize": 3_145_728,
//!         "MIMEType": "image/jpeg",
//!         "ImageWidth": 6000,
//!         "ImageHeight": 4000
//!     });
//!     let exif = json!({
//!         "Make": "Canon",
//!         "FNumber": 2.8,
//!         "ExposureTime": 0.004,
//!         "GPSLatitude": [35, 40, 12],
//!         "GPSLatitudeRef": "N",
//!         "GPSLongitude": [139, 45, 0],
//!         "GPSLongitudeRef": "E"
//!     });
//!
//!     let result = Normalizer::default().normalize_json(&file, &exif)?;
//!     assert!(result.has_metadata);
//!     println!("{}", serde_json::to_string_pretty(&result)?);
//!     Ok(())
//! }
//! ```

mod error;
pub use error::NormalizeError;

pub mod convert;
pub mod enums;
pub mod features;
pub mod normalizer;
pub mod presence;
pub mod raw;
pub mod structs;
pub mod time;

pub use features::basic::FileInfo;
pub use normalizer::Normalizer;
pub use raw::{RawTags, RawValue, Rational};
pub use structs::{AggregateMetadata, DisplayValue, NormalizeResult};
