//! Type definitions and constants for the terminal front-end.

use chrono::{Locale, NaiveDate};

/// Column display mode for multi-month layouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnsMode {
    /// Fixed number of columns.
    Fixed(u32),
    /// Auto-detect from terminal width.
    Auto,
}

/// Display options resolved from the command line and environment.
#[derive(Clone, Debug)]
pub struct PickContext {
    /// Locale used for every label.
    pub locale: Locale,
    /// Today's date for highlighting.
    pub today: NaiveDate,
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Whether to show the previous month's days in the leading cells.
    pub filler: bool,
    /// Number of consecutive months to display.
    pub months: u32,
    /// Column display mode.
    pub columns: ColumnsMode,
    /// Width of gutter between months in multi-month display.
    pub gutter_width: usize,
}

// Constants for grid formatting
pub const MONTH_WIDTH: usize = 20; // 7 cells × 2 + 6 separators
pub const GUTTER_WIDTH_REGULAR: usize = 2;

// Color is enabled by default for better user experience
pub const COLOR_ENABLED_BY_DEFAULT: bool = true;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_UNDERLINE: &str = "\x1b[4m";
pub const COLOR_DIM: &str = "\x1b[2m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
