//! Parsing of Exif date strings into chrono types.

use chrono::{NaiveDate, NaiveDateTime};

/// Parses an Exif timestamp (`YYYY:MM:DD HH:MM:SS[.fff]`, or the dashed variant).
pub fn parse_exif_datetime(s: &str) -> Option<NaiveDateTime> {
    let formats = [
        "%Y:%m:%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y:%m:%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
    ];
    let s = s.trim();
    formats
        .into_iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Parses a GPS date stamp (`YYYY:MM:DD`).
pub fn parse_exif_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y:%m:%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_exif_datetime() {
        let dt = parse_exif_datetime("2023:07:14 18:32:05").unwrap();
        assert_eq!(dt.to_string(), "2023-07-14 18:32:05");

        let dashed = parse_exif_datetime("2023-07-14 18:32:05").unwrap();
        assert_eq!(dt, dashed);

        let subsec = parse_exif_datetime("2023:07:14 18:32:05.250").unwrap();
        assert_eq!(subsec.nanosecond(), 250_000_000);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_exif_datetime("0000:00:00 00:00:00").is_none());
        assert!(parse_exif_datetime("yesterday").is_none());
        assert!(parse_exif_date("2024:13:01").is_none());
    }

    #[test]
    fn test_parse_exif_date() {
        assert_eq!(
            parse_exif_date("2024:05:01"),
            NaiveDate::from_ymd_opt(2024, 5, 1)
        );
    }
}
