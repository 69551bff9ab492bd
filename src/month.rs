//! One month of one year and the days it holds.

use chrono::{Datelike, Locale, NaiveDate, TimeDelta};

use crate::date::CalendarDate;
use crate::error::Error;
use crate::locale;

/// Check if a year is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Number of days in `month` of `year`: the day before the 1st of the
/// following month.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, Error> {
    if !(1..=12).contains(&month) {
        return Err(Error::invalid_month(month));
    }
    let out_of_range = || Error::DateOutOfRange(format!("{:04}-{:02}", year, month));
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1).ok_or_else(out_of_range)?, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .ok_or_else(out_of_range)
}

/// One month of a given year.
#[derive(Clone, Debug)]
pub struct CalendarMonth {
    first: NaiveDate,
    locale: Locale,
    name: String,
    day_count: u32,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32, locale: Locale) -> Result<Self, Error> {
        let day_count = days_in_month(year, month)?;
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| Error::DateOutOfRange(format!("{:04}-{:02}", year, month)))?;

        Ok(CalendarMonth {
            first,
            locale,
            name: locale::month_long_name(first, locale),
            day_count,
        })
    }

    /// Localized month name in nominative case.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ordinal(&self) -> u32 {
        self.first.month()
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn day_count(&self) -> u32 {
        self.day_count
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Date for a day of this month.
    ///
    /// The day is not bounds checked: 0 is the last day of the previous
    /// month, `day_count + 1` the first day of the next one.
    pub fn get_day(&self, day_of_month: i64) -> Result<CalendarDate, Error> {
        day_of_month
            .checked_sub(1)
            .and_then(TimeDelta::try_days)
            .and_then(|offset| self.first.checked_add_signed(offset))
            .map(|date| CalendarDate::from_naive_date(date, self.locale))
            .ok_or_else(|| {
                Error::DateOutOfRange(format!(
                    "day {} of {:04}-{:02}",
                    day_of_month,
                    self.year(),
                    self.ordinal()
                ))
            })
    }

    /// Fresh iterator over day 1..=day_count.
    pub fn days(&self) -> Days {
        Days {
            first: self.first,
            locale: self.locale,
            next: 1,
            end: self.day_count,
        }
    }

    pub fn previous(&self) -> Result<CalendarMonth, Error> {
        if self.ordinal() == 1 {
            CalendarMonth::new(self.year() - 1, 12, self.locale)
        } else {
            CalendarMonth::new(self.year(), self.ordinal() - 1, self.locale)
        }
    }

    pub fn next(&self) -> Result<CalendarMonth, Error> {
        if self.ordinal() == 12 {
            CalendarMonth::new(self.year() + 1, 1, self.locale)
        } else {
            CalendarMonth::new(self.year(), self.ordinal() + 1, self.locale)
        }
    }
}

impl IntoIterator for &CalendarMonth {
    type Item = CalendarDate;
    type IntoIter = Days;

    fn into_iter(self) -> Days {
        self.days()
    }
}

/// Days of a month in ascending order.
#[derive(Clone, Debug)]
pub struct Days {
    first: NaiveDate,
    locale: Locale,
    next: u32,
    end: u32,
}

impl Iterator for Days {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<CalendarDate> {
        if self.next > self.end {
            return None;
        }
        let date = self.first.with_day(self.next)?;
        self.next += 1;
        Some(CalendarDate::from_naive_date(date, self.locale))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end + 1).saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Days {}
