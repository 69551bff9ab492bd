//! Selection state kept next to the cursor.

use crate::cursor::CalendarCursor;
use crate::date::CalendarDate;
use crate::error::Error;
use crate::grid::build_grid;

pub const DEFAULT_PATTERN: &str = "YYYY-MM-DD";

/// A cursor plus the picked date and the pattern it is shown with.
#[derive(Clone, Debug)]
pub struct DatePicker {
    cursor: CalendarCursor,
    selected: Option<CalendarDate>,
    pattern: String,
}

impl DatePicker {
    pub fn new(cursor: CalendarCursor) -> Self {
        DatePicker {
            cursor,
            selected: None,
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn cursor(&self) -> &CalendarCursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut CalendarCursor {
        &mut self.cursor
    }

    pub fn selected(&self) -> Option<&CalendarDate> {
        self.selected.as_ref()
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn select(&mut self, date: CalendarDate) {
        log::debug!("selected {}", date.format("YYYY-MM-DD"));
        self.selected = Some(date);
    }

    /// Select a day of the displayed month.
    pub fn select_day(&mut self, day_of_month: u32) -> Result<(), Error> {
        let month = self.cursor.month();
        if !(1..=month.day_count()).contains(&day_of_month) {
            return Err(Error::InvalidArgument(format!(
                "Invalid day: {} (must be 1-{})",
                day_of_month,
                month.day_count()
            )));
        }
        let date = month.get_day(day_of_month as i64)?;
        self.select(date);
        Ok(())
    }

    /// Select today and show its month.
    pub fn select_today(&mut self) -> Result<(), Error> {
        self.cursor.go_to_today()?;
        let today = self.cursor.today().clone();
        self.select(today);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn is_selected(&self, date: &CalendarDate) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|selected| selected.equals_day(date))
    }

    /// The selection rendered with the picker's pattern, or an empty string.
    pub fn text(&self) -> String {
        self.selected
            .as_ref()
            .map(|date| date.format(&self.pattern))
            .unwrap_or_default()
    }

    /// Grid of the displayed month.
    pub fn grid(&self) -> Result<Vec<CalendarDate>, Error> {
        build_grid(&self.cursor)
    }
}
