//! Date format conversion helpers for date elements

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Convert a formatted date string to a unix timestamp.
///
/// Empty input maps to `0`, matching what hosts expect when a cleared date
/// field is written into a timestamp column. Unparseable input is `None`.
pub fn date_to_timestamp(value: &str, format: &str) -> Option<i64> {
    if value.is_empty() {
        return Some(0);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
        return Some(datetime.and_utc().timestamp());
    }
    NaiveDate::parse_from_str(value, format)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc().timestamp())
}

/// Convert a unix timestamp back to a formatted date string
pub fn timestamp_to_date(timestamp: i64, format: &str) -> Option<String> {
    DateTime::from_timestamp(timestamp, 0).map(|datetime| datetime.format(format).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_only_round_trip() {
        let ts = date_to_timestamp("31/01/2026", "%d/%m/%Y").unwrap();
        assert_eq!(timestamp_to_date(ts, "%d/%m/%Y").unwrap(), "31/01/2026");
    }

    #[test]
    fn test_datetime_format() {
        let ts = date_to_timestamp("2026-01-31 12:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(
            timestamp_to_date(ts, "%Y-%m-%d %H:%M:%S").unwrap(),
            "2026-01-31 12:30:00"
        );
    }

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(date_to_timestamp("", "%Y-%m-%d"), Some(0));
    }

    #[test]
    fn test_unparseable_input_is_none() {
        assert_eq!(date_to_timestamp("tomorrow", "%Y-%m-%d"), None);
    }

    #[test]
    fn test_epoch() {
        assert_eq!(
            timestamp_to_date(0, "%Y-%m-%d").unwrap(),
            "1970-01-01"
        );
    }
}
