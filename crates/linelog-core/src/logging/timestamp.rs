//! Record timestamps and log file names, from local time

use chrono::{Local, NaiveDateTime};

/// Default directory for log files, relative to the working directory
pub const DEFAULT_LOG_DIR: &str = "logs";

const TIMESTAMP_FORMAT: &str = "[%Y/%m/%d - %H:%M:%S%.3f]";

/// Width of a formatted timestamp, brackets included
pub const TIMESTAMP_LEN: usize = "[YYYY/MM/DD - HH:MM:SS.mmm]".len();

const FILE_NAME_FORMAT: &str = "D%Y-%m-%d_T%H-%M-%S.log";

/// `[YYYY/MM/DD - HH:MM:SS.mmm]` for the given time
pub fn format_timestamp(time: &NaiveDateTime) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Timestamp of the current local time
pub fn generate_timestamp() -> String {
    format_timestamp(&Local::now().naive_local())
}

/// `D<YYYY>-<MM>-<DD>_T<HH>-<MM>-<SS>.log` for the given time
pub fn format_log_file_name(time: &NaiveDateTime) -> String {
    time.format(FILE_NAME_FORMAT).to_string()
}

/// Log file path under the default directory, e.g. `logs/D2024-03-05_T07-08-09.log`
pub fn format_log_name(time: &NaiveDateTime) -> String {
    format!("{}/{}", DEFAULT_LOG_DIR, format_log_file_name(time))
}

/// Log file path for the current local time
pub fn log_name() -> String {
    format_log_name(&Local::now().naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_milli_opt(h, mi, s, ms)
            .unwrap()
    }

    fn digits(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
    }

    /// Checks `[dddd/dd/dd - dd:dd:dd.ddd]`
    fn is_timestamp(s: &str) -> bool {
        let b = s.as_bytes();
        s.len() == TIMESTAMP_LEN
            && b[0] == b'['
            && digits(&s[1..5])
            && b[5] == b'/'
            && digits(&s[6..8])
            && b[8] == b'/'
            && digits(&s[9..11])
            && &s[11..14] == " - "
            && digits(&s[14..16])
            && b[16] == b':'
            && digits(&s[17..19])
            && b[19] == b':'
            && digits(&s[20..22])
            && b[22] == b'.'
            && digits(&s[23..26])
            && b[26] == b']'
    }

    /// Checks `logs/Ddddd-dd-dd_Tdd-dd-dd.log`
    fn is_log_name(s: &str) -> bool {
        let Some(rest) = s.strip_prefix("logs/D") else {
            return false;
        };
        let Some(stamp) = rest.strip_suffix(".log") else {
            return false;
        };
        let Some((date, time)) = stamp.split_once("_T") else {
            return false;
        };
        let date: Vec<_> = date.split('-').collect();
        let time: Vec<_> = time.split('-').collect();
        date.len() == 3
            && date[0].len() == 4
            && date[1..].iter().all(|p| p.len() == 2)
            && date.iter().all(|p| digits(p))
            && time.len() == 3
            && time.iter().all(|p| p.len() == 2 && digits(p))
    }

    #[test]
    fn test_timestamp_zero_padding() {
        let time = at(2024, 3, 5, 7, 8, 9, 4);
        assert_eq!(format_timestamp(&time), "[2024/03/05 - 07:08:09.004]");
    }

    #[test]
    fn test_timestamp_two_digit_fields() {
        let time = at(1999, 12, 31, 23, 59, 58, 999);
        assert_eq!(format_timestamp(&time), "[1999/12/31 - 23:59:58.999]");
        assert_eq!(format_timestamp(&time).len(), TIMESTAMP_LEN);
    }

    #[test]
    fn test_generate_timestamp_shape() {
        let stamp = generate_timestamp();
        assert!(is_timestamp(&stamp), "bad timestamp: {}", stamp);
        assert!(!is_timestamp("[2024/3/05 - 07:08:09.004]"));
    }

    #[test]
    fn test_log_name_zero_padding() {
        let time = at(2024, 3, 5, 7, 8, 9, 0);
        assert_eq!(format_log_file_name(&time), "D2024-03-05_T07-08-09.log");
        assert_eq!(format_log_name(&time), "logs/D2024-03-05_T07-08-09.log");
    }

    #[test]
    fn test_log_name_shape() {
        let name = log_name();
        assert!(is_log_name(&name), "bad log name: {}", name);
        assert!(!is_log_name("logs/D2024-3-05_T07-08-09.log"));
    }
}
