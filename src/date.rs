//! A single calendar day with its localized, derived fields.

use std::fmt;

use chrono::{DateTime, Datelike, Local, Locale, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::Error;
use crate::locale;

/// One concrete calendar day.
///
/// Every field is derived from the backing date-time when the value is
/// built; there are no setters, a different day is a different value.
#[derive(Clone, Debug)]
pub struct CalendarDate {
    datetime: NaiveDateTime,
    locale: Locale,
    day: u32,
    weekday_long: String,
    weekday_short: String,
    weekday_ordinal: u32,
    year: i32,
    month_long: String,
    month_short: String,
    month_ordinal: u32,
    instant: i64,
    week_number: u32,
}

/// Format tokens, longest first within each letter so that `DD` is never
/// taken from the middle of `DDDD`.
#[derive(Clone, Copy, Debug)]
enum Token {
    Year,
    ShortYear,
    Week,
    WeekdayLong,
    WeekdayShort,
    Day,
    MonthLong,
    MonthShort,
    Month,
}

const TOKENS: [Token; 9] = [
    Token::Year,
    Token::ShortYear,
    Token::Week,
    Token::WeekdayLong,
    Token::WeekdayShort,
    Token::Day,
    Token::MonthLong,
    Token::MonthShort,
    Token::Month,
];

impl Token {
    fn as_str(self) -> &'static str {
        match self {
            Token::Year => "YYYY",
            Token::ShortYear => "YYY",
            Token::Week => "WW",
            Token::WeekdayLong => "DDDD",
            Token::WeekdayShort => "DDD",
            Token::Day => "DD",
            Token::MonthLong => "MMMM",
            Token::MonthShort => "MMM",
            Token::Month => "MM",
        }
    }
}

impl CalendarDate {
    /// Build a date from an optional instant, defaulting to now.
    pub fn new(instant: Option<NaiveDateTime>, locale: Locale) -> Self {
        match instant {
            Some(datetime) => Self::from_datetime(datetime, locale),
            None => Self::now(locale),
        }
    }

    pub fn now(locale: Locale) -> Self {
        Self::from_datetime(Local::now().naive_local(), locale)
    }

    /// Build a date at midnight of a civil day.
    pub fn from_ymd(year: i32, month: u32, day: u32, locale: Locale) -> Result<Self, Error> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| Error::DateOutOfRange(format!("{:04}-{:02}-{:02}", year, month, day)))?;
        Ok(Self::from_naive_date(date, locale))
    }

    /// Build a date from milliseconds since the Unix epoch (UTC).
    pub fn from_timestamp_millis(millis: i64, locale: Locale) -> Result<Self, Error> {
        let datetime = DateTime::from_timestamp_millis(millis)
            .ok_or_else(|| Error::DateOutOfRange(format!("{} ms", millis)))?;
        Ok(Self::from_datetime(datetime.naive_utc(), locale))
    }

    /// Build a date at midnight of `date`.
    pub fn from_naive_date(date: NaiveDate, locale: Locale) -> Self {
        Self::from_datetime(date.and_time(NaiveTime::MIN), locale)
    }

    pub fn from_datetime(datetime: NaiveDateTime, locale: Locale) -> Self {
        let date = datetime.date();
        let weekday_ordinal = date.weekday().number_from_sunday();

        // Weekday of January 1st (0=Sunday), walked back from this date.
        let days_since_jan1 = date.ordinal0();
        let jan1_weekday = (weekday_ordinal as i64 - 1 - days_since_jan1 as i64).rem_euclid(7) as u32;
        let week_number = (days_since_jan1 + jan1_weekday + 1).div_ceil(7);

        CalendarDate {
            datetime,
            locale,
            day: date.day(),
            weekday_long: locale::weekday_long_name(date, locale),
            weekday_short: locale::weekday_short_name(date, locale),
            weekday_ordinal,
            year: date.year(),
            month_long: locale::month_long_name(date, locale),
            month_short: locale::month_short_name(date, locale),
            month_ordinal: date.month(),
            instant: datetime.and_utc().timestamp_millis(),
            week_number,
        }
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn weekday_long(&self) -> &str {
        &self.weekday_long
    }

    pub fn weekday_short(&self) -> &str {
        &self.weekday_short
    }

    /// Weekday ordinal, 1=Sunday..7=Saturday.
    pub fn weekday_ordinal(&self) -> u32 {
        self.weekday_ordinal
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Last two digits of the year.
    pub fn year_short(&self) -> u32 {
        self.year.rem_euclid(100) as u32
    }

    pub fn month_long(&self) -> &str {
        &self.month_long
    }

    pub fn month_short(&self) -> &str {
        &self.month_short
    }

    pub fn month_ordinal(&self) -> u32 {
        self.month_ordinal
    }

    /// Milliseconds since the Unix epoch, reading the local date-time as UTC.
    ///
    /// For [`CalendarDate::now`] this is the wall-clock time, so it is off
    /// from the real epoch milliseconds by the local UTC offset.
    pub fn instant(&self) -> i64 {
        self.instant
    }

    /// Week of year: `ceil((days since Jan 1 + weekday of Jan 1 + 1) / 7)`.
    ///
    /// Weeks start on Sunday and week 1 holds January 1st; this is not the
    /// ISO 8601 week number.
    pub fn week_number(&self) -> u32 {
        self.week_number
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn date_naive(&self) -> NaiveDate {
        self.datetime.date()
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.datetime
    }

    /// Same civil day, whatever the time of day.
    pub fn equals_day(&self, other: &CalendarDate) -> bool {
        self.day == other.day
            && self.month_ordinal == other.month_ordinal
            && self.year == other.year
    }

    pub fn is_today(&self) -> bool {
        self.equals_day(&CalendarDate::now(self.locale))
    }

    /// Compare against a fixed "today" instead of the clock.
    pub fn is_today_at(&self, today: &CalendarDate) -> bool {
        self.equals_day(today)
    }

    /// Substitute date tokens in `pattern`.
    ///
    /// Recognized tokens are `YYYY`, `YYY`, `WW`, `DDDD`, `DDD`, `DD`,
    /// `MMMM`, `MMM` and `MM`. The longest token wins at each position and
    /// only the first occurrence of each token is replaced; later
    /// occurrences and any other text are copied as they are.
    ///
    /// ```
    /// use datepick::date::CalendarDate;
    ///
    /// let date = CalendarDate::from_ymd(2024, 3, 5, chrono::Locale::en_US).unwrap();
    /// assert_eq!(date.format("YYYY-MM-DD"), "2024-03-05");
    /// assert_eq!(date.format("DDDD, MMMM DD"), "Tuesday, March 05");
    /// ```
    pub fn format(&self, pattern: &str) -> String {
        let mut used = [false; TOKENS.len()];
        let mut out = String::with_capacity(pattern.len() + 16);
        let mut rest = pattern;

        while let Some(c) = rest.chars().next() {
            let matched = TOKENS
                .iter()
                .enumerate()
                .find(|(_, token)| rest.starts_with(token.as_str()));

            match matched {
                Some((idx, &token)) => {
                    if used[idx] {
                        out.push_str(token.as_str());
                    } else {
                        used[idx] = true;
                        out.push_str(&self.token_value(token));
                    }
                    rest = &rest[token.as_str().len()..];
                }
                None => {
                    out.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }

        out
    }

    fn token_value(&self, token: Token) -> String {
        match token {
            Token::Year => format!("{:04}", self.year),
            Token::ShortYear => format!("{:02}", self.year_short()),
            Token::Week => format!("{:02}", self.week_number),
            Token::WeekdayLong => self.weekday_long.clone(),
            Token::WeekdayShort => self.weekday_short.clone(),
            Token::Day => format!("{:02}", self.day),
            Token::MonthLong => self.month_long.clone(),
            Token::MonthShort => self.month_short.clone(),
            Token::Month => format!("{:02}", self.month_ordinal),
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format("DDD, DD MMMM YYYY"))
    }
}
