//! Month grid layout: leading days of the previous month, then the month itself.

use crate::cursor::CalendarCursor;
use crate::date::CalendarDate;
use crate::error::Error;

pub const DAYS_PER_WEEK: usize = 7;

/// Dates shown in a Sunday-first, 7-column grid for the cursor's month.
///
/// The first `weekday_ordinal(1st) - 1` entries are the last days of the
/// previous month, followed by every day of the current month. The result
/// is not padded after the last day; see [`pad_to_weeks`].
pub fn build_grid(cursor: &CalendarCursor) -> Result<Vec<CalendarDate>, Error> {
    let month = cursor.month();
    let first_day = month.get_day(1)?;
    let lead_count = first_day.weekday_ordinal() - 1;
    let prev_month = cursor.previous_month_snapshot()?;

    let mut grid = Vec::with_capacity((lead_count + month.day_count()) as usize);
    grid.extend(prev_month.days().skip((prev_month.day_count() - lead_count) as usize));
    grid.extend(month.days());

    log::debug!(
        "grid for {:04}-{:02}: {} leading, {} total",
        month.year(),
        month.ordinal(),
        lead_count,
        grid.len()
    );

    Ok(grid)
}

/// Split a grid into week rows; the last row may be short.
pub fn grid_rows(grid: &[CalendarDate]) -> Vec<&[CalendarDate]> {
    grid.chunks(DAYS_PER_WEEK).collect()
}

/// Pad a grid with empty cells up to a whole number of weeks.
pub fn pad_to_weeks(grid: &[CalendarDate]) -> Vec<Option<CalendarDate>> {
    let mut cells: Vec<Option<CalendarDate>> = grid.iter().cloned().map(Some).collect();
    let len = cells.len().div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK;
    cells.resize(len, None);
    cells
}
