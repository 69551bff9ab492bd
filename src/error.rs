//! Error type shared by the calendar core and the front-end.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A month ordinal outside 1..=12, a day outside its month, or a bad option value.
    InvalidArgument(String),
    /// Locale identifier unknown to the locale tables.
    InvalidLocale(String),
    /// Date outside the representable range, or an impossible civil date.
    DateOutOfRange(String),
}

impl Error {
    pub(crate) fn invalid_month(month: u32) -> Self {
        Error::InvalidArgument(format!("Invalid month: {} (must be 1-12)", month))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "{}", msg),
            Error::InvalidLocale(id) => write!(f, "Unknown locale `{}`", id),
            Error::DateOutOfRange(msg) => write!(f, "Date out of range: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
