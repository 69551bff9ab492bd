//! Month/year navigation state.

use chrono::{Locale, NaiveDate};

use crate::date::CalendarDate;
use crate::error::Error;
use crate::locale::parse_locale;
use crate::month::{self, CalendarMonth};

/// Get today's date, respecting DATEPICK_TEST_TIME environment variable for testing.
pub fn today_date() -> NaiveDate {
    if let Ok(test_time) = std::env::var("DATEPICK_TEST_TIME")
        && let Ok(date) = NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}

/// The currently displayed month and year.
///
/// Navigation replaces the held [`CalendarMonth`] wholesale; a failed
/// operation leaves the cursor untouched.
#[derive(Clone, Debug)]
pub struct CalendarCursor {
    year: i32,
    month: CalendarMonth,
    week_day_labels: [String; 7],
    today: CalendarDate,
    locale: Locale,
}

impl CalendarCursor {
    /// Create a cursor for `month` of `year`, defaulting to today's month.
    pub fn new(year: Option<i32>, month: Option<u32>, locale: &str) -> Result<Self, Error> {
        let locale = parse_locale(locale)?;
        let today = CalendarDate::from_naive_date(today_date(), locale);
        Self::with_today(year, month, today)
    }

    /// Create a cursor with an explicit "today"; its locale is used throughout.
    pub fn with_today(
        year: Option<i32>,
        month: Option<u32>,
        today: CalendarDate,
    ) -> Result<Self, Error> {
        let locale = today.locale();
        let year = year.unwrap_or(today.year());
        let month = CalendarMonth::new(year, month.unwrap_or(today.month_ordinal()), locale)?;
        let week_day_labels = week_day_labels(&month);

        log::debug!(
            "cursor created at {:04}-{:02}, today {}",
            year,
            month.ordinal(),
            today.format("YYYY-MM-DD")
        );

        Ok(CalendarCursor {
            year,
            month,
            week_day_labels,
            today,
            locale,
        })
    }

    pub fn month(&self) -> &CalendarMonth {
        &self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Short weekday names, Sunday first.
    pub fn week_day_labels(&self) -> &[String; 7] {
        &self.week_day_labels
    }

    pub fn is_leap_year(&self) -> bool {
        month::is_leap_year(self.year)
    }

    pub fn today(&self) -> &CalendarDate {
        &self.today
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn next_month(&mut self) -> Result<(), Error> {
        if self.month.ordinal() == 12 {
            return self.next_year();
        }
        let month = CalendarMonth::new(self.year, self.month.ordinal() + 1, self.locale)?;
        self.set_month(month);
        Ok(())
    }

    pub fn previous_month(&mut self) -> Result<(), Error> {
        if self.month.ordinal() == 1 {
            return self.previous_year();
        }
        let month = CalendarMonth::new(self.year, self.month.ordinal() - 1, self.locale)?;
        self.set_month(month);
        Ok(())
    }

    /// Move to January of the following year.
    pub fn next_year(&mut self) -> Result<(), Error> {
        let month = CalendarMonth::new(self.year + 1, 1, self.locale)?;
        self.set_month(month);
        Ok(())
    }

    /// Move to December of the previous year.
    pub fn previous_year(&mut self) -> Result<(), Error> {
        let month = CalendarMonth::new(self.year - 1, 12, self.locale)?;
        self.set_month(month);
        Ok(())
    }

    /// Jump to an explicit month and year.
    pub fn go_to_date(&mut self, month: u32, year: i32) -> Result<(), Error> {
        let month = CalendarMonth::new(year, month, self.locale)?;
        self.set_month(month);
        Ok(())
    }

    /// Jump back to the month holding today.
    pub fn go_to_today(&mut self) -> Result<(), Error> {
        self.go_to_date(self.today.month_ordinal(), self.today.year())
    }

    /// The month before the current one, without moving.
    pub fn previous_month_snapshot(&self) -> Result<CalendarMonth, Error> {
        self.month.previous()
    }

    /// The month after the current one, without moving.
    pub fn next_month_snapshot(&self) -> Result<CalendarMonth, Error> {
        self.month.next()
    }

    fn set_month(&mut self, month: CalendarMonth) {
        log::debug!("cursor moved to {:04}-{:02}", month.year(), month.ordinal());
        self.year = month.year();
        self.month = month;
    }
}

/// Slot the weekday names of the month's first seven days by weekday ordinal.
fn week_day_labels(month: &CalendarMonth) -> [String; 7] {
    let mut slots: [Option<String>; 7] = Default::default();
    for day in month.days().take(7) {
        let slot = &mut slots[day.weekday_ordinal() as usize - 1];
        if slot.is_none() {
            *slot = Some(day.weekday_short().to_string());
        }
    }
    slots.map(Option::unwrap_or_default)
}
