//! Response prefix formatting.

use chrono::{Local, NaiveTime};

/// Source of the current wall-clock time.
pub type Clock = fn() -> NaiveTime;

/// Current local time of day.
pub fn local_now() -> NaiveTime {
    Local::now().time()
}

/// `HH:mm:ss`, 24-hour, zero padded.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

/// `"<HH:mm:ss>: <body>"`
pub fn stamp(time: NaiveTime, body: &str) -> String {
    format!("{}: {}", format_time(time), body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_is_zero_padded_24h() {
        let morning = NaiveTime::from_hms_opt(7, 5, 9).unwrap();
        assert_eq!(format_time(morning), "07:05:09");

        let evening = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap();
        assert_eq!(format_time(evening), "23:59:59");

        let midnight = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        assert_eq!(format_time(midnight), "00:00:00");
    }

    #[test]
    fn test_stamp() {
        let time = NaiveTime::from_hms_opt(13, 4, 0).unwrap();
        assert_eq!(stamp(time, "hi there"), "13:04:00: hi there");
        assert_eq!(stamp(time, ""), "13:04:00: ");
    }

    #[test]
    fn test_prefixes_order_within_a_day() {
        // Walk the whole day a second at a time
        let mut previous = format_time(NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        for secs in 1..86_400 {
            let time = NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap();
            let current = format_time(time);
            assert!(previous < current, "{previous} !< {current}");
            previous = current;
        }
    }
}
