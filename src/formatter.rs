//! Text rendering of the picker: month headers, weekday row and day grid.

use unicode_width::UnicodeWidthStr;

use crate::cursor::CalendarCursor;
use crate::date::CalendarDate;
use crate::error::Error;
use crate::grid::{DAYS_PER_WEEK, build_grid, pad_to_weeks};
use crate::month::CalendarMonth;
use crate::picker::DatePicker;
use crate::types::{
    COLOR_DIM, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL, COLOR_UNDERLINE,
    ColumnsMode, MONTH_WIDTH, PickContext,
};

impl PickContext {
    pub fn months_per_row(&self) -> u32 {
        match self.columns {
            ColumnsMode::Fixed(n) => n,
            ColumnsMode::Auto => {
                // ~20 chars per month + gutter, clamp to 1-3 for readability
                let month_width = MONTH_WIDTH + self.gutter_width;
                if let Some(term_width) = get_terminal_width() {
                    (term_width / month_width as u32).clamp(1, 3)
                } else {
                    3
                }
            }
        }
    }
}

/// Format month header "Month, Year" with optional color.
pub fn format_month_header(month: &CalendarMonth, width: usize, color: bool) -> String {
    let header = format!("{}, {}", month.name(), month.year());
    let centered = center_text(&header, width);
    if color {
        format!("{}{}{}", COLOR_TEAL, centered, COLOR_RESET)
    } else {
        centered
    }
}

/// Center text within a specified width, accounting for Unicode character widths.
fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Display width of text with ANSI escape sequences removed.
pub fn visible_width(text: &str) -> usize {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip "[...m"
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            plain.push(c);
        }
    }
    plain.width()
}

/// Weekday header row from the cursor's labels, cut to two characters each.
pub fn format_weekday_headers(labels: &[String; 7], color: bool) -> String {
    let row = labels
        .iter()
        .map(|label| {
            let short: String = label.chars().take(2).collect();
            format!("{:<2}", short)
        })
        .collect::<Vec<_>>()
        .join(" ");

    if color {
        format!("{}{}{}", COLOR_SAND_YELLOW, row, COLOR_RESET)
    } else {
        row
    }
}

/// Format one grid cell.
///
/// Color priority: selected > today > leading day > regular
fn format_day(
    ctx: &PickContext,
    date: &CalendarDate,
    is_leading: bool,
    today: &CalendarDate,
    selected: Option<&CalendarDate>,
) -> String {
    if is_leading && !ctx.filler {
        return "  ".to_string();
    }

    let day_str = format!("{:>2}", date.day());
    if !ctx.color {
        return day_str;
    }

    let is_selected = selected.is_some_and(|s| s.equals_day(date));
    let is_today = date.is_today_at(today);

    if is_selected {
        format!("{}{}{}", COLOR_REVERSE, day_str, COLOR_RESET)
    } else if is_today {
        format!("{}{}{}", COLOR_UNDERLINE, day_str, COLOR_RESET)
    } else if is_leading {
        format!("{}{}{}", COLOR_DIM, day_str, COLOR_RESET)
    } else {
        day_str
    }
}

/// Format the cursor's month as lines: header, weekday row, week rows.
pub fn format_month_grid(
    ctx: &PickContext,
    cursor: &CalendarCursor,
    selected: Option<&CalendarDate>,
) -> Result<Vec<String>, Error> {
    let month = cursor.month();
    let cells = pad_to_weeks(&build_grid(cursor)?);

    let mut lines = Vec::with_capacity(2 + cells.len() / DAYS_PER_WEEK);
    lines.push(format_month_header(month, MONTH_WIDTH, ctx.color));
    lines.push(format_weekday_headers(cursor.week_day_labels(), ctx.color));

    for week in cells.chunks(DAYS_PER_WEEK) {
        let line = week
            .iter()
            .map(|cell| match cell {
                Some(date) => {
                    let is_leading = date.month_ordinal() != month.ordinal();
                    format_day(ctx, date, is_leading, cursor.today(), selected)
                }
                None => "  ".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(line);
    }

    Ok(lines)
}

/// Join month grids side by side.
pub fn join_side_by_side(ctx: &PickContext, grids: &[Vec<String>]) -> Vec<String> {
    let max_height = grids.iter().map(|g| g.len()).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(max_height);
    for row in 0..max_height {
        let mut line = String::new();
        for (i, grid) in grids.iter().enumerate() {
            let is_last = i == grids.len() - 1;
            let text = grid.get(row).map(String::as_str).unwrap_or("");
            line.push_str(text);
            if !is_last {
                let padding = MONTH_WIDTH.saturating_sub(visible_width(text));
                line.push_str(&" ".repeat(padding + ctx.gutter_width));
            }
        }
        lines.push(line.trim_end().to_string());
    }
    lines
}

/// Render the picker: `ctx.months` consecutive months from the cursor, then
/// the selected date if any.
pub fn render_picker(ctx: &PickContext, picker: &DatePicker) -> Result<Vec<String>, Error> {
    let selected = picker.selected();

    let mut cursor = picker.cursor().clone();
    let mut grids = Vec::with_capacity(ctx.months as usize);
    for i in 0..ctx.months {
        if i > 0 {
            cursor.next_month()?;
        }
        grids.push(format_month_grid(ctx, &cursor, selected)?);
    }

    let mut lines = Vec::new();
    for (i, chunk) in grids.chunks(ctx.months_per_row() as usize).enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(join_side_by_side(ctx, chunk));
    }

    if selected.is_some() {
        lines.push(String::new());
        lines.push(picker.text());
    }

    Ok(lines)
}

/// Get terminal width using terminal_size crate.
fn get_terminal_width() -> Option<u32> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as u32)
}
