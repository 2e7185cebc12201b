//! Category extractors. Each one reads the raw tag dictionary and fills a
//! fixed-shape record; a field without data is `None`, never omitted.

pub mod basic;
pub mod camera;
pub mod error;
pub mod gps;
pub mod other;
pub mod settings;
