//! 时间来源

use chrono::{Local, NaiveDateTime, Timelike};

/// 响应时间戳的文本格式，秒的小数部分按精度输出 0/3/6/9 位
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// 秒和纳秒都为 0 时省略秒
pub const TIMESTAMP_FORMAT_WITHOUT_SECONDS: &str = "%Y-%m-%dT%H:%M";

/// 时间来源
pub trait Clock: Send + Sync {
    /// 当前本地日期时间
    fn now(&self) -> NaiveDateTime;
}

/// 系统时钟
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// 固定时钟，始终返回同一时刻
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// ISO-8601 本地时间，与 Java `LocalDateTime.toString()` 输出一致
pub fn format_timestamp(at: NaiveDateTime) -> String {
    if at.second() == 0 && at.nanosecond() == 0 {
        at.format(TIMESTAMP_FORMAT_WITHOUT_SECONDS).to_string()
    } else {
        at.format(TIMESTAMP_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32, nano: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 20)
            .unwrap()
            .and_hms_nano_opt(h, m, s, nano)
            .unwrap()
    }

    #[test]
    fn test_format_without_fraction() {
        assert_eq!(format_timestamp(at(9, 5, 7, 0)), "2024-02-20T09:05:07");
    }

    #[test]
    fn test_format_keeps_sub_second_precision() {
        assert_eq!(format_timestamp(at(9, 5, 7, 120_000_000)), "2024-02-20T09:05:07.120");
        assert_eq!(
            format_timestamp(at(9, 5, 7, 123_456_789)),
            "2024-02-20T09:05:07.123456789"
        );
    }

    #[test]
    fn test_format_omits_zero_seconds() {
        assert_eq!(format_timestamp(at(8, 30, 0, 0)), "2024-02-20T08:30");
        assert_eq!(format_timestamp(at(8, 30, 0, 1_000_000)), "2024-02-20T08:30:00.001");
    }

    #[test]
    fn test_formatted_timestamp_parses_back() {
        let original = at(23, 59, 59, 987_654_000);
        let parsed =
            NaiveDateTime::parse_from_str(&format_timestamp(original), TIMESTAMP_FORMAT).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(at(12, 0, 0, 0));
        assert_eq!(clock.now(), clock.now());
    }
}
