//! Locale resolution and localized calendar labels.
//!
//! Names come from chrono's locale tables; the only local data are the
//! nominative month names for locales where `%B` yields the genitive form.

use chrono::{Datelike, Locale, NaiveDate};

use crate::error::Error;

/// Resolve a locale identifier such as `en_US`, `de-DE` or `ru_RU.UTF-8`.
///
/// `default` resolves to the system locale.
pub fn parse_locale(id: &str) -> Result<Locale, Error> {
    if id == "default" {
        return Ok(system_locale());
    }

    let normalized = id
        .split('.')
        .next()
        .unwrap_or(id)
        .split('@')
        .next()
        .unwrap_or(id)
        .replace('-', "_");

    normalized
        .parse()
        .map_err(|_| Error::InvalidLocale(id.to_string()))
}

/// Get system locale from environment (LC_ALL > LC_TIME > LANG > en_US).
pub fn system_locale() -> Locale {
    let id = std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_TIME"))
        .or_else(|_| std::env::var("LANG"))
        .unwrap_or_else(|_| "en_US.UTF-8".to_string());

    // "C" and "POSIX" carry no names of their own
    if matches!(id.as_str(), "C" | "C.UTF-8" | "POSIX") {
        return Locale::en_US;
    }

    match parse_locale(&id) {
        Ok(locale) => locale,
        Err(err) => {
            log::warn!("{}, falling back to en_US", err);
            Locale::en_US
        }
    }
}

pub fn weekday_long_name(date: NaiveDate, locale: Locale) -> String {
    date.format_localized("%A", locale).to_string()
}

pub fn weekday_short_name(date: NaiveDate, locale: Locale) -> String {
    date.format_localized("%a", locale).to_string()
}

/// Month name in nominative case.
pub fn month_long_name(date: NaiveDate, locale: Locale) -> String {
    let nominative: Option<[&str; 12]> = match locale {
        Locale::ru_RU => Some([
            "Январь",
            "Февраль",
            "Март",
            "Апрель",
            "Май",
            "Июнь",
            "Июль",
            "Август",
            "Сентябрь",
            "Октябрь",
            "Ноябрь",
            "Декабрь",
        ]),
        Locale::uk_UA => Some([
            "Січень",
            "Лютий",
            "Березень",
            "Квітень",
            "Травень",
            "Червень",
            "Липень",
            "Серпень",
            "Вересень",
            "Жовтень",
            "Листопад",
            "Грудень",
        ]),
        Locale::be_BY => Some([
            "Студзень",
            "Люты",
            "Сакавік",
            "Красавік",
            "Май",
            "Чэрвень",
            "Ліпень",
            "Жнівень",
            "Верасень",
            "Кастрычнік",
            "Лістапад",
            "Снежань",
        ]),
        _ => None,
    };

    match nominative {
        Some(names) => names[date.month0() as usize].to_string(),
        None => date.format_localized("%B", locale).to_string(),
    }
}

pub fn month_short_name(date: NaiveDate, locale: Locale) -> String {
    date.format_localized("%b", locale).to_string()
}
