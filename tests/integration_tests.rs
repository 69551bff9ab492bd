//! Integration tests for the text front-end and argument handling.

use chrono::{Locale, NaiveDate};

use datepick::cursor::CalendarCursor;
use datepick::date::CalendarDate;
use datepick::formatter::{
    format_month_grid, format_month_header, format_weekday_headers, join_side_by_side,
    render_picker, visible_width,
};
use datepick::month::CalendarMonth;
use datepick::picker::DatePicker;
use datepick::types::{ColumnsMode, MONTH_WIDTH, PickContext};

fn test_context() -> PickContext {
    PickContext {
        locale: Locale::en_US,
        today: NaiveDate::from_ymd_opt(2026, 2, 18).unwrap(),
        color: false,
        filler: false,
        months: 1,
        columns: ColumnsMode::Fixed(3),
        gutter_width: 2,
    }
}

fn cursor_at(year: i32, month: u32) -> CalendarCursor {
    let today = CalendarDate::from_ymd(2026, 2, 18, Locale::en_US).unwrap();
    CalendarCursor::with_today(Some(year), Some(month), today).unwrap()
}

mod month_grid_tests {
    use super::*;

    #[test]
    fn test_header_centered() {
        let month = CalendarMonth::new(2024, 4, Locale::en_US).unwrap();
        let header = format_month_header(&month, MONTH_WIDTH, false);
        assert_eq!(header, "     April, 2024    ");
    }

    #[test]
    fn test_header_color() {
        let month = CalendarMonth::new(2024, 4, Locale::en_US).unwrap();
        let header = format_month_header(&month, MONTH_WIDTH, true);
        assert!(header.starts_with("\x1b[96m"));
        assert!(header.ends_with("\x1b[0m"));
        assert_eq!(visible_width(&header), MONTH_WIDTH);
    }

    #[test]
    fn test_weekday_row() {
        let cursor = cursor_at(2024, 4);
        let row = format_weekday_headers(cursor.week_day_labels(), false);
        assert_eq!(row, "Su Mo Tu We Th Fr Sa");
    }

    #[test]
    fn test_april_2024_layout() {
        let ctx = test_context();
        let lines = format_month_grid(&ctx, &cursor_at(2024, 4), None).unwrap();

        assert_eq!(lines.len(), 2 + 5);
        assert_eq!(lines[2], "    1  2  3  4  5  6");
        assert_eq!(lines[3], " 7  8  9 10 11 12 13");
        assert_eq!(lines[6], "28 29 30            ");
    }

    #[test]
    fn test_filler_days_shown() {
        let ctx = PickContext {
            filler: true,
            ..test_context()
        };
        let lines = format_month_grid(&ctx, &cursor_at(2024, 4), None).unwrap();
        assert_eq!(lines[2], "31  1  2  3  4  5  6");
    }

    #[test]
    fn test_month_starting_sunday() {
        let ctx = test_context();
        let lines = format_month_grid(&ctx, &cursor_at(2026, 2), None).unwrap();
        assert_eq!(lines.len(), 2 + 4);
        assert_eq!(lines[2], " 1  2  3  4  5  6  7");
        assert_eq!(lines[5], "22 23 24 25 26 27 28");
    }

    #[test]
    fn test_line_widths_consistent() {
        let ctx = test_context();
        let lines = format_month_grid(&ctx, &cursor_at(2024, 3), None).unwrap();
        for line in &lines {
            assert_eq!(visible_width(line), MONTH_WIDTH, "line {:?}", line);
        }
    }

    #[test]
    fn test_selected_day_highlighted() {
        let ctx = PickContext {
            color: true,
            ..test_context()
        };
        let selected = CalendarDate::from_ymd(2024, 4, 14, Locale::en_US).unwrap();
        let lines = format_month_grid(&ctx, &cursor_at(2024, 4), Some(&selected)).unwrap();
        assert!(lines[4].starts_with("\x1b[7m14\x1b[0m"));
    }

    #[test]
    fn test_today_underlined() {
        let ctx = PickContext {
            color: true,
            ..test_context()
        };
        let lines = format_month_grid(&ctx, &cursor_at(2026, 2), None).unwrap();
        assert!(lines.iter().any(|l| l.contains("\x1b[4m18\x1b[0m")));
    }

    #[test]
    fn test_today_follows_cursor() {
        let ctx = PickContext {
            color: true,
            today: NaiveDate::from_ymd_opt(2026, 2, 3).unwrap(),
            ..test_context()
        };
        let lines = format_month_grid(&ctx, &cursor_at(2026, 2), None).unwrap();
        assert!(lines.iter().any(|l| l.contains("\x1b[4m18\x1b[0m")));
        assert!(!lines.iter().any(|l| l.contains("\x1b[4m 3\x1b[0m")));
    }

    #[test]
    fn test_no_color_codes_when_disabled() {
        let ctx = test_context();
        let selected = CalendarDate::from_ymd(2026, 2, 18, Locale::en_US).unwrap();
        let lines = format_month_grid(&ctx, &cursor_at(2026, 2), Some(&selected)).unwrap();
        assert!(lines.iter().all(|l| !l.contains('\x1b')));
    }

    #[test]
    fn test_german_header() {
        let ctx = PickContext {
            locale: Locale::de_DE,
            ..test_context()
        };
        let today = CalendarDate::from_ymd(2026, 2, 18, Locale::de_DE).unwrap();
        let cursor = CalendarCursor::with_today(Some(2024), Some(3), today).unwrap();
        let lines = format_month_grid(&ctx, &cursor, None).unwrap();
        assert!(lines[0].contains("März, 2024"));
        assert_eq!(lines[1], "So Mo Di Mi Do Fr Sa");
    }
}

mod render_tests {
    use super::*;

    #[test]
    fn test_side_by_side() {
        let ctx = test_context();
        let grids = vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string()],
        ];
        let lines = join_side_by_side(&ctx, &grids);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("a{}c", " ".repeat(MONTH_WIDTH - 1 + 2)));
        assert_eq!(lines[1], "b");
    }

    #[test]
    fn test_three_months_across_year() {
        let ctx = PickContext {
            months: 3,
            ..test_context()
        };
        let picker = DatePicker::new(cursor_at(2024, 11));
        let lines = render_picker(&ctx, &picker).unwrap();
        assert!(lines[0].contains("November, 2024"));
        assert!(lines[0].contains("December, 2024"));
        assert!(lines[0].contains("January, 2025"));
        // rendering does not move the picker's cursor
        assert_eq!(picker.cursor().month().ordinal(), 11);
    }

    #[test]
    fn test_months_wrap_into_rows() {
        let ctx = PickContext {
            months: 4,
            columns: ColumnsMode::Fixed(2),
            ..test_context()
        };
        let picker = DatePicker::new(cursor_at(2024, 1));
        let lines = render_picker(&ctx, &picker).unwrap();
        let headers: Vec<&String> = lines.iter().filter(|l| l.contains(", 2024")).collect();
        assert_eq!(headers.len(), 2);
        assert!(headers[1].contains("March, 2024"));
        assert!(headers[1].contains("April, 2024"));
    }

    #[test]
    fn test_selection_line() {
        let ctx = test_context();
        let mut picker = DatePicker::new(cursor_at(2024, 4)).with_pattern("DDDD, MMMM DD");
        picker.select_day(14).unwrap();
        let lines = render_picker(&ctx, &picker).unwrap();
        assert_eq!(lines.last().unwrap(), "Sunday, April 14");
    }

    #[test]
    fn test_no_selection_line() {
        let ctx = test_context();
        let picker = DatePicker::new(cursor_at(2024, 4));
        let lines = render_picker(&ctx, &picker).unwrap();
        assert_eq!(lines.len(), 7);
    }
}

mod get_display_date_tests {
    use chrono::NaiveDate;
    use clap::Parser;

    use datepick::args::{Args, build_picker, get_display_date, parse_month};
    use datepick::error::Error;

    use super::test_context;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 18).unwrap()
    }

    #[test]
    fn test_no_arguments() {
        let args = Args::parse_from(["datepick"]);
        assert_eq!(get_display_date(&args, today()).unwrap(), (2026, 2));
    }

    #[test]
    fn test_single_year_argument() {
        let args = Args::parse_from(["datepick", "2030"]);
        assert_eq!(get_display_date(&args, today()).unwrap(), (2030, 2));
    }

    #[test]
    fn test_single_month_argument() {
        let args = Args::parse_from(["datepick", "7"]);
        assert_eq!(get_display_date(&args, today()).unwrap(), (2026, 7));
        let args = Args::parse_from(["datepick", "march"]);
        assert_eq!(get_display_date(&args, today()).unwrap(), (2026, 3));
    }

    #[test]
    fn test_month_year_arguments() {
        let args = Args::parse_from(["datepick", "2", "2024"]);
        assert_eq!(get_display_date(&args, today()).unwrap(), (2024, 2));
    }

    #[test]
    fn test_invalid_month() {
        let args = Args::parse_from(["datepick", "13", "2024"]);
        assert!(matches!(
            get_display_date(&args, today()),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_invalid_year() {
        let args = Args::parse_from(["datepick", "2", "12345"]);
        assert!(get_display_date(&args, today()).is_err());
    }

    #[test]
    fn test_parse_month_names() {
        assert_eq!(parse_month("Jan"), Some(1));
        assert_eq!(parse_month("декабрь"), Some(12));
        assert_eq!(parse_month("12"), Some(12));
        assert_eq!(parse_month("0"), None);
        assert_eq!(parse_month("smarch"), None);
    }

    #[test]
    fn test_build_picker_navigation() {
        let ctx = test_context();
        let args = Args::parse_from(["datepick", "2", "2024", "-N", "11"]);
        let picker = build_picker(&ctx, &args).unwrap();
        assert_eq!(picker.cursor().year(), 2025);
        assert_eq!(picker.cursor().month().ordinal(), 1);
    }

    #[test]
    fn test_build_picker_selection() {
        let ctx = test_context();
        let args = Args::parse_from(["datepick", "4", "2024", "-s", "5", "-f", "DD.MM.YYYY"]);
        let picker = build_picker(&ctx, &args).unwrap();
        assert_eq!(picker.text(), "05.04.2024");
    }

    #[test]
    fn test_build_picker_today() {
        let ctx = test_context();
        let args = Args::parse_from(["datepick", "4", "2024", "-t"]);
        let picker = build_picker(&ctx, &args).unwrap();
        assert_eq!(picker.text(), "2026-02-18");
        assert_eq!(picker.cursor().year(), 2026);
    }

    #[test]
    fn test_build_picker_bad_day() {
        let ctx = test_context();
        let args = Args::parse_from(["datepick", "2", "2023", "-s", "30"]);
        assert!(build_picker(&ctx, &args).is_err());
    }
}
