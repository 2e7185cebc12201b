use crate::convert::{Hemisphere, dms_to_decimal, format_coordinate, format_number};
use crate::enums::resolve_altitude_ref;
use crate::raw::RawTags;
use crate::structs::DisplayValue;
use crate::time::parse_exif_date;
use chrono::NaiveDate;
use serde::Serialize;

/// A position in signed decimal degrees (negative is south or west).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Reads `GPSLatitude`/`GPSLongitude` and their hemisphere references.
    ///
    /// All four tags must be present and both DMS sequences must have exactly three parts.
    pub fn from_tags(tags: &RawTags) -> Option<Self> {
        let axis = |dms_key: &str, ref_key: &str| {
            let hemisphere = tags.text(ref_key).and_then(Hemisphere::from_ref)?;
            dms_to_decimal(tags.sequence(dms_key)?, hemisphere)
        };
        let latitude = axis("GPSLatitude", "GPSLatitudeRef");
        let longitude = axis("GPSLongitude", "GPSLongitudeRef");
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Some(Self {
                latitude,
                longitude,
            }),
            (None, None) => None,
            _ => {
                log::debug!("Only one GPS axis could be read, dropping both");
                None
            }
        }
    }

    /// Map link with both axes at six decimals, sign-encoded.
    pub fn map_link(&self, base_url: &str) -> String {
        format!(
            "{base_url}?q={},{}",
            format_coordinate(self.latitude),
            format_coordinate(self.longitude)
        )
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GpsInfo {
    pub latitude: Option<DisplayValue>,
    pub longitude: Option<DisplayValue>,
    pub altitude: Option<DisplayValue>,
    pub altitude_ref: Option<DisplayValue>,
    pub image_direction: Option<DisplayValue>,
    pub date_stamp: Option<DisplayValue>,
    pub map_link: Option<DisplayValue>,
    #[serde(skip)]
    pub coordinate: Option<GeoCoordinate>,
}

impl GpsInfo {
    pub fn rows(&self) -> Vec<(&'static str, Option<&DisplayValue>)> {
        vec![
            ("Latitude", self.latitude.as_ref()),
            ("Longitude", self.longitude.as_ref()),
            ("Altitude", self.altitude.as_ref()),
            ("Altitude reference", self.altitude_ref.as_ref()),
            ("Image direction", self.image_direction.as_ref()),
            ("GPS date", self.date_stamp.as_ref()),
            ("Map link", self.map_link.as_ref()),
        ]
    }

    /// The GPS date stamp, parsed.
    pub fn date(&self) -> Option<NaiveDate> {
        match self.date_stamp.as_ref()? {
            DisplayValue::Text(s) => parse_exif_date(s),
            DisplayValue::Number(_) => None,
        }
    }
}

pub fn get_gps_info(tags: &RawTags, map_url_base: &str) -> GpsInfo {
    let coordinate = GeoCoordinate::from_tags(tags);

    GpsInfo {
        latitude: coordinate.map(|c| DisplayValue::from(format_coordinate(c.latitude))),
        longitude: coordinate.map(|c| DisplayValue::from(format_coordinate(c.longitude))),
        altitude: tags
            .number("GPSAltitude")
            .map(|a| DisplayValue::from(format!("{}m", format_number(a)))),
        altitude_ref: resolve_altitude_ref(tags.value("GPSAltitudeRef")),
        image_direction: tags
            .number("GPSImgDirection")
            .map(|d| DisplayValue::from(format!("{}°", format_number(d)))),
        date_stamp: tags.scalar("GPSDateStamp").and_then(DisplayValue::from_raw),
        map_link: coordinate.map(|c| DisplayValue::from(c.map_link(map_url_base))),
        coordinate,
    }
}
