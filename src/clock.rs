//! Local Clock
//!
//! Client-local date, time and UTC offset used to prefill consume fields and
//! to stamp submissions.

use chrono::{DateTime, Local, Offset, TimeZone};

/// Local date/time formatted for the consume inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStamp {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    /// East-positive offset from UTC in minutes (UTC-5 is -300)
    pub offset_minutes: i32,
}

impl LocalStamp {
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    pub fn from_datetime<Tz: TimeZone>(at: &DateTime<Tz>) -> Self {
        let naive = at.naive_local();
        Self {
            date: naive.format("%Y-%m-%d").to_string(),
            time: naive.format("%H:%M").to_string(),
            offset_minutes: at.offset().fix().local_minus_utc() / 60,
        }
    }
}

/// Offset in the server's sign convention: the negation of the client's
/// east-positive offset.
pub fn server_timezone_offset(offset_minutes: i32) -> i32 {
    -offset_minutes
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_stamp_formats_local_wall_clock() {
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let at = tz.with_ymd_and_hms(2024, 1, 15, 9, 30, 59).unwrap();
        let stamp = LocalStamp::from_datetime(&at);
        assert_eq!(stamp.date, "2024-01-15");
        assert_eq!(stamp.time, "09:30");
        assert_eq!(stamp.offset_minutes, -300);
    }

    #[test]
    fn test_stamp_pads_single_digits() {
        let tz = FixedOffset::east_opt(0).unwrap();
        let at = tz.with_ymd_and_hms(2025, 3, 4, 7, 5, 0).unwrap();
        let stamp = LocalStamp::from_datetime(&at);
        assert_eq!(stamp.date, "2025-03-04");
        assert_eq!(stamp.time, "07:05");
    }

    #[test]
    fn test_server_offset_is_negated() {
        assert_eq!(server_timezone_offset(-300), 300);
        assert_eq!(server_timezone_offset(330), -330);
        assert_eq!(server_timezone_offset(0), 0);
    }

    #[test]
    fn test_now_is_well_formed() {
        let stamp = LocalStamp::now();
        assert_eq!(stamp.date.len(), 10);
        assert_eq!(stamp.time.len(), 5);
    }
}
