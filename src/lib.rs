//! Calendar date-picker core.
//!
//! Features:
//! - Calendar days with localized names and a token formatter
//! - Leap-year aware months with lazy day iteration
//! - Month/year navigation cursor with December/January wrap-around
//! - Month grid layout with leading days of the previous month
//! - Date selection state and a terminal front-end

pub mod args;
pub mod cursor;
pub mod date;
pub mod error;
pub mod formatter;
pub mod grid;
pub mod locale;
pub mod month;
pub mod picker;
pub mod types;

pub use cursor::CalendarCursor;
pub use date::CalendarDate;
pub use error::Error;
pub use grid::build_grid;
pub use month::CalendarMonth;
pub use picker::DatePicker;
