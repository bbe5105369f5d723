//! Unix timestamp conversion and date-range checks.
//!
//! All conversions are relative to 1970-01-01T00:00:00Z.

use chrono::{DateTime, TimeZone, Utc};

use crate::error::{Error, Result};

/// Convert a unix timestamp in seconds to a UTC date/time.
pub fn from_unix_seconds(timestamp: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp, 0).ok_or_else(|| {
        Error::invalid_argument("timestamp", format!("{} seconds is out of range", timestamp))
    })
}

/// Convert a unix timestamp in milliseconds to a UTC date/time.
pub fn from_unix_millis(timestamp: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(timestamp).ok_or_else(|| {
        Error::invalid_argument(
            "timestamp",
            format!("{} milliseconds is out of range", timestamp),
        )
    })
}

pub fn to_unix_seconds<Tz: TimeZone>(date_time: &DateTime<Tz>) -> i64 {
    date_time.timestamp()
}

pub fn to_unix_millis<Tz: TimeZone>(date_time: &DateTime<Tz>) -> i64 {
    date_time.timestamp_millis()
}

/// Whether `date_time` lies in `[start, end)`. A missing `end` leaves the
/// range open.
pub fn is_within_range<Tz: TimeZone>(
    date_time: &DateTime<Tz>,
    start: &DateTime<Tz>,
    end: Option<&DateTime<Tz>>,
) -> bool {
    date_time >= start && end.map_or(true, |end| date_time < end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    #[test]
    fn test_to_unix_seconds() {
        // 23:31:30 UTC on 13 February 2009
        let dt = Utc.with_ymd_and_hms(2009, 2, 13, 23, 31, 30).unwrap();
        assert_eq!(to_unix_seconds(&dt), 1_234_567_890);
    }

    #[test]
    fn test_from_unix_seconds() {
        // 01:46:40 UTC on 9 September 2001
        let expected = Utc.with_ymd_and_hms(2001, 9, 9, 1, 46, 40).unwrap();
        assert_eq!(from_unix_seconds(1_000_000_000).unwrap(), expected);
    }

    #[test]
    fn test_epoch() {
        let epoch = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(from_unix_seconds(0).unwrap(), epoch);
        assert_eq!(from_unix_millis(0).unwrap(), epoch);
        assert_eq!(from_unix_seconds(-86_400).unwrap(), epoch - Duration::days(1));
    }

    #[test]
    fn test_millis() {
        let dt = from_unix_millis(1_234_567_890_123).unwrap();
        assert_eq!(to_unix_seconds(&dt), 1_234_567_890);
        assert_eq!(to_unix_millis(&dt), 1_234_567_890_123);
    }

    #[test]
    fn test_offset_date_time_uses_utc_instant() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let dt = offset.with_ymd_and_hms(2009, 2, 14, 1, 31, 30).unwrap();
        assert_eq!(to_unix_seconds(&dt), 1_234_567_890);
    }

    #[test]
    fn test_out_of_range() {
        let err = from_unix_seconds(i64::MAX).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { name: "timestamp", .. }));
        assert!(from_unix_millis(i64::MIN).is_err());
    }

    #[test]
    fn test_is_within_range() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let mid = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();

        assert!(is_within_range(&mid, &start, Some(&end)));
        assert!(is_within_range(&start, &start, Some(&end)));
        assert!(!is_within_range(&end, &start, Some(&end)));
        assert!(!is_within_range(&(start - Duration::seconds(1)), &start, Some(&end)));
    }

    #[test]
    fn test_is_within_open_range() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let far_future = Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap();
        assert!(is_within_range(&far_future, &start, None));
        assert!(!is_within_range(&(start - Duration::days(1)), &start, None));
    }
}
