//! Command-line argument parsing using clap.
//!
//! Positional arguments follow the cal convention: `[month] [year]`

use std::io::IsTerminal;
use std::path::PathBuf;

use chrono::Datelike;
use clap::{Parser, ValueHint};

use crate::cursor::{CalendarCursor, today_date};
use crate::date::CalendarDate;
use crate::error::Error;
use crate::locale::{parse_locale, system_locale};
use crate::picker::{DEFAULT_PATTERN, DatePicker};
use crate::types::{COLOR_ENABLED_BY_DEFAULT, ColumnsMode, GUTTER_WIDTH_REGULAR, PickContext};

#[derive(Parser, Debug)]
#[command(name = "datepick")]
#[command(about = "Pick a date from a month calendar", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Month (1-12 or name), or a 4-digit year when given alone.
    #[arg(index = 1, value_name = "month", value_hint = ValueHint::Other)]
    pub month_arg: Option<String>,

    /// Year (0-9999).
    #[arg(index = 2, value_name = "year", value_hint = ValueHint::Other)]
    pub year_arg: Option<String>,

    /// Locale for month and weekday names (default from LC_ALL, LC_TIME or LANG).
    #[arg(short = 'l', long, help_heading = "Calendar options", value_name = "id")]
    pub locale: Option<String>,

    /// Move forward this many months before display.
    #[arg(
        short = 'N',
        long = "next",
        default_value_t = 0,
        help_heading = "Navigation",
        value_name = "count"
    )]
    pub next: u32,

    /// Move back this many months before display.
    #[arg(
        short = 'P',
        long = "prev",
        default_value_t = 0,
        help_heading = "Navigation",
        value_name = "count"
    )]
    pub prev: u32,

    /// Jump to January of the following year.
    #[arg(short = 'y', long = "next-year", help_heading = "Navigation")]
    pub next_year: bool,

    /// Jump to December of the previous year.
    #[arg(long = "prev-year", help_heading = "Navigation")]
    pub prev_year: bool,

    /// Select a day of the displayed month.
    #[arg(short = 's', long, help_heading = "Selection", value_name = "day")]
    pub select: Option<u32>,

    /// Select today and show its month.
    #[arg(short = 't', long, help_heading = "Selection")]
    pub today: bool,

    /// Pattern for the selected date (YYYY YYY WW DDDD DDD DD MMMM MMM MM).
    #[arg(
        short = 'f',
        long,
        default_value = DEFAULT_PATTERN,
        help_heading = "Selection",
        value_name = "pattern"
    )]
    pub format: String,

    /// Number of consecutive months to display.
    #[arg(
        short = 'n',
        long = "months",
        default_value_t = 1,
        help_heading = "Output options",
        value_name = "num"
    )]
    pub months: u32,

    /// Number of columns for multiple months (or "auto" for terminal width).
    #[arg(
        short = 'c',
        long = "columns",
        help_heading = "Output options",
        value_name = "width"
    )]
    pub columns: Option<String>,

    /// Show the previous month's days before the 1st.
    #[arg(long, help_heading = "Output options")]
    pub filler: bool,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub color: bool,

    /// Write log messages to this file instead of stderr.
    #[arg(long = "log-file", help_heading = "Output options", value_name = "path")]
    pub log_file: Option<PathBuf>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Display a month calendar and pick a date from it.

Without any arguments, display the current month.

Examples:
  datepick                  Display current month
  datepick 2 2026           Display February 2026
  datepick 2026             Display the current month of 2026
  datepick -N 3             Display the month three months ahead
  datepick -s 14 -f DDDD    Select the 14th and print its weekday
  datepick -t               Select today
  datepick -n 3 --filler    Three months with leading days shown
  datepick -l de_DE         German month and weekday names";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl PickContext {
    pub fn new(args: &Args) -> Result<Self, Error> {
        let today = today_date();

        let color = !args.color && COLOR_ENABLED_BY_DEFAULT && std::io::stdout().is_terminal();

        let columns = match args.columns.as_deref() {
            Some("auto") | None => ColumnsMode::Auto,
            Some(s) => {
                let n = s
                    .parse::<u32>()
                    .map_err(|_| Error::InvalidArgument(format!("Invalid columns value: {}", s)))?;
                if n == 0 {
                    return Err(Error::InvalidArgument("Columns must be positive".to_string()));
                }
                ColumnsMode::Fixed(n)
            }
        };

        if args.months == 0 {
            return Err(Error::InvalidArgument("Months must be positive".to_string()));
        }

        if args.next_year && args.prev_year {
            return Err(Error::InvalidArgument(
                "Options --next-year and --prev-year are mutually exclusive".to_string(),
            ));
        }

        let locale = match args.locale.as_deref() {
            Some(id) => parse_locale(id)?,
            None => system_locale(),
        };

        Ok(PickContext {
            locale,
            today,
            color,
            filler: args.filler,
            months: args.months,
            columns,
            gutter_width: GUTTER_WIDTH_REGULAR,
        })
    }
}

/// Parse month from string (numeric 1-12 or name in English/Russian).
pub fn parse_month(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>()
        && (1..=12).contains(&n)
    {
        return Some(n);
    }

    let s_lower = s.to_lowercase();
    let month_names: [(&str, u32); 35] = [
        // English full names
        ("january", 1),
        ("february", 2),
        ("march", 3),
        ("april", 4),
        ("may", 5),
        ("june", 6),
        ("july", 7),
        ("august", 8),
        ("september", 9),
        ("october", 10),
        ("november", 11),
        ("december", 12),
        // Russian full names
        ("январь", 1),
        ("февраль", 2),
        ("март", 3),
        ("апрель", 4),
        ("май", 5),
        ("июнь", 6),
        ("июль", 7),
        ("август", 8),
        ("сентябрь", 9),
        ("октябрь", 10),
        ("ноябрь", 11),
        ("декабрь", 12),
        // English short forms
        ("jan", 1),
        ("feb", 2),
        ("mar", 3),
        ("apr", 4),
        ("jun", 6),
        ("jul", 7),
        ("aug", 8),
        ("sep", 9),
        ("oct", 10),
        ("nov", 11),
        ("dec", 12),
    ];
    month_names
        .iter()
        .find(|(name, _)| *name == s_lower)
        .map(|(_, num)| *num)
}

fn parse_year(s: &str) -> Result<i32, Error> {
    let year = s
        .parse::<i32>()
        .map_err(|_| Error::InvalidArgument(format!("Invalid year: {}", s)))?;
    if !(0..=9999).contains(&year) {
        return Err(Error::InvalidArgument(format!(
            "Invalid year: {} (must be 0-9999)",
            year
        )));
    }
    Ok(year)
}

/// Calculate display month and year from positional arguments.
///
/// Argument patterns:
/// - no args: today's month
/// - 1 arg: year (4 digits) or month (1-2 digits or name)
/// - 2 args: month year
pub fn get_display_date(args: &Args, today: chrono::NaiveDate) -> Result<(i32, u32), Error> {
    match (args.month_arg.as_deref(), args.year_arg.as_deref()) {
        (None, None) => Ok((today.year(), today.month())),
        (Some(val), None) => {
            if val.len() == 4
                && let Ok(year) = parse_year(val)
            {
                return Ok((year, today.month()));
            }
            parse_month(val)
                .map(|month| (today.year(), month))
                .ok_or_else(|| Error::InvalidArgument(format!("Invalid argument: {}", val)))
        }
        (Some(month), Some(year)) => {
            let month = parse_month(month)
                .ok_or_else(|| Error::InvalidArgument(format!("Invalid month: {}", month)))?;
            Ok((parse_year(year)?, month))
        }
        (None, Some(_)) => Err(Error::InvalidArgument(
            "Invalid argument combination".to_string(),
        )),
    }
}

/// Build the picker described by the arguments: position the cursor, apply
/// navigation, then selection.
pub fn build_picker(ctx: &PickContext, args: &Args) -> Result<DatePicker, Error> {
    let (year, month) = get_display_date(args, ctx.today)?;
    let today = CalendarDate::from_naive_date(ctx.today, ctx.locale);
    let cursor = CalendarCursor::with_today(Some(year), Some(month), today)?;
    let mut picker = DatePicker::new(cursor).with_pattern(args.format.clone());

    if args.today {
        picker.select_today()?;
    }

    let cursor = picker.cursor_mut();
    if args.next_year {
        cursor.next_year()?;
    } else if args.prev_year {
        cursor.previous_year()?;
    }
    for _ in 0..args.next {
        cursor.next_month()?;
    }
    for _ in 0..args.prev {
        cursor.previous_month()?;
    }

    if let Some(day) = args.select {
        picker.select_day(day)?;
    }

    Ok(picker)
}
