use chrono::{Datelike, Locale, NaiveDate, NaiveDateTime, Timelike};
use std::fmt;
use std::fmt::{Display, Formatter};
use tracing::debug;

/// API가 사용하는 일시 형식 (`yyyy-MM-dd HH:mm:ss`)
pub const PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// [`PATTERN`]으로 표현된 문자열의 길이
const PATTERN_LEN: usize = 19;

/// [`PATTERN`]의 `%Y`가 네 자리로 출력되는 연도 범위
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// API 일시는 일본 표준시(UTC+9) 기준이다.
const JST_OFFSET_SECONDS: i64 = 9 * 60 * 60;

/// 게재일, 갱신일 등 API에서 사용하는 일시
///
/// 그레고리력으로 실제 존재하는 일시만 만들 수 있다.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NarouDate {
    value: NaiveDateTime,
}

impl NarouDate {
    /// 각 구성 요소로 일시를 만든다. 존재하지 않는 날짜나 시각이면 `None`을 반환한다.
    ///
    /// 연도는 0 ~ 9999만 허용한다. 그 밖의 연도는 [`PATTERN`]으로 다시 읽을 수 없다.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<Self> {
        if !YEAR_RANGE.contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, second))
            .map(|value| Self { value })
    }

    pub fn year(&self) -> i32 {
        self.value.year()
    }

    pub fn month(&self) -> u32 {
        self.value.month()
    }

    pub fn day(&self) -> u32 {
        self.value.day()
    }

    pub fn hour(&self) -> u32 {
        self.value.hour()
    }

    pub fn minute(&self) -> u32 {
        self.value.minute()
    }

    pub fn second(&self) -> u32 {
        self.value.second()
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.value
    }

    /// 일본 표준시로 해석한 UNIX 타임스탬프(초)
    pub fn timestamp(&self) -> i64 {
        self.value.and_utc().timestamp() - JST_OFFSET_SECONDS
    }
}

impl From<NaiveDateTime> for NarouDate {
    fn from(value: NaiveDateTime) -> Self {
        Self { value }
    }
}

impl Display for NarouDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", DateCodec::default().format(self))
    }
}

/// 일시 문자열 변환기
///
/// 읽을 때의 로케일과 출력할 때의 로케일을 따로 가진다.
/// 기본값은 `en_US`로 읽고 `ja_JP`로 출력한다.
#[derive(Debug, Clone, Copy)]
pub struct DateCodec {
    parse_locale: Locale,
    display_locale: Locale,
}

impl Default for DateCodec {
    fn default() -> Self {
        Self::new(Locale::en_US, Locale::ja_JP)
    }
}

impl DateCodec {
    pub fn new(parse_locale: Locale, display_locale: Locale) -> Self {
        Self { parse_locale, display_locale }
    }

    pub fn parse_locale(&self) -> Locale {
        self.parse_locale
    }

    pub fn display_locale(&self) -> Locale {
        self.display_locale
    }

    /// 형식에 맞지 않거나 달력상 존재하지 않는 일시이면 `None`을 반환한다.
    ///
    /// chrono는 공백 여러개, 한 자리 월/시, 부호 붙은 연도도 읽으므로
    /// 읽은 값을 다시 출력해 입력과 같은 경우만 허용한다.
    pub fn parse(&self, s: &str) -> Option<NarouDate> {
        if s.len() != PATTERN_LEN {
            debug!("Date length mismatch: {:?} (locale ==> {:?})", s, self.parse_locale);
            return None;
        }

        let value = NaiveDateTime::parse_from_str(s, PATTERN)
            .inspect_err(|e| {
                debug!("Failed to parse date: {:?} (locale ==> {:?}, Err ==> {})", s, self.parse_locale, e);
            })
            .ok()?;

        if value.format(PATTERN).to_string() != s {
            debug!("Date is not in canonical form: {:?} (locale ==> {:?})", s, self.parse_locale);
            return None;
        }
        Some(NarouDate::from(value))
    }

    pub fn format(&self, date: &NarouDate) -> String {
        date.value
            .and_utc()
            .format_localized(PATTERN, self.display_locale)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_then_format_reproduces_literal() {
        let codec = DateCodec::default();
        let date = codec.parse("2020-03-01 12:00:00").unwrap();
        assert_eq!(codec.format(&date), "2020-03-01 12:00:00");
        assert_eq!(date.to_string(), "2020-03-01 12:00:00");
    }

    #[test]
    fn parse_rejects_impossible_calendar_date() {
        let codec = DateCodec::default();
        assert!(codec.parse("2021-02-30 00:00:00").is_none());
        assert!(codec.parse("2021-04-31 10:00:00").is_none());
        assert!(codec.parse("2021-01-01 24:00:00").is_none());
    }

    #[test]
    fn parse_rejects_other_patterns() {
        let codec = DateCodec::default();
        assert!(codec.parse("").is_none());
        assert!(codec.parse("2021/01/01 00:00:00").is_none());
        assert!(codec.parse("2021-01-01T00:00:00").is_none());
        assert!(codec.parse("2021-1-1 0:00:00").is_none());
        assert!(codec.parse("2021-01-01").is_none());
    }

    #[test]
    fn parse_rejects_loosely_shaped_input_of_same_length() {
        let codec = DateCodec::default();
        assert!(codec.parse("2021-01-01  0:00:00").is_none());
        assert!(codec.parse("2021-01-01\t00:00:00").is_none());
        assert!(codec.parse("+2021-1-01 00:00:00").is_none());
        assert!(codec.parse("2021-01-01 00:00:00").is_some());
    }

    #[test]
    fn parse_accepts_leap_day() {
        let date = DateCodec::default().parse("2020-02-29 23:59:59").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2020, 2, 29));
        assert_eq!((date.hour(), date.minute(), date.second()), (23, 59, 59));
    }

    #[test]
    fn new_validates_components() {
        assert!(NarouDate::new(2021, 2, 28, 0, 0, 0).is_some());
        assert!(NarouDate::new(2021, 2, 29, 0, 0, 0).is_none());
        assert!(NarouDate::new(2021, 13, 1, 0, 0, 0).is_none());
        assert!(NarouDate::new(2021, 6, 31, 0, 0, 0).is_none());
        assert!(NarouDate::new(2021, 6, 30, 0, 60, 0).is_none());
    }

    #[test]
    fn new_rejects_years_outside_four_digits() {
        assert!(NarouDate::new(10000, 1, 1, 0, 0, 0).is_none());
        assert!(NarouDate::new(-1, 1, 1, 0, 0, 0).is_none());

        let codec = DateCodec::default();
        let last = NarouDate::new(9999, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(codec.parse(&codec.format(&last)), Some(last));
    }

    #[test]
    fn locales_are_kept_apart() {
        let codec = DateCodec::new(Locale::en_US, Locale::ja_JP);
        assert!(matches!(codec.parse_locale(), Locale::en_US));
        assert!(matches!(codec.display_locale(), Locale::ja_JP));

        let same = DateCodec::new(Locale::ja_JP, Locale::ja_JP);
        let date = NarouDate::new(2019, 12, 25, 8, 5, 9).unwrap();
        assert_eq!(same.format(&date), codec.format(&date));
        assert_eq!(codec.format(&date), "2019-12-25 08:05:09");
    }

    #[test]
    fn timestamp_is_japan_standard_time() {
        let date = NarouDate::new(1970, 1, 1, 9, 0, 0).unwrap();
        assert_eq!(date.timestamp(), 0);
    }
}
