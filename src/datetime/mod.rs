//! Date and time rendering (`DD/MM/YYYY`, `HH:mm`), the inverse parse,
//! wire-format date-time strings, and calendar-date range checks.
//!
//! The free functions use [`DateFormatter::default`], fixed to
//! America/Sao_Paulo (UTC-03:00). Construct a [`DateFormatter`] for any
//! other offset.
//!
//! # Example
//!
//! ```
//! use chrono::{NaiveDate, NaiveTime};
//! use cadastro::datetime::*;
//!
//! let ms = to_timestamp("01/05/2024 14:30").unwrap();
//! assert_eq!(ms, "1714584600000");
//! assert_eq!(format_date_time(ms.parse::<i64>().unwrap()).unwrap(), "01/05/2024 14:30");
//!
//! let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
//! let time = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
//! assert_eq!(combine_date_time_string(&date, &time), "2024-05-01T14:30:00-03:00");
//! ```

mod formatter;
mod range;
mod timestamp;

pub use formatter::{DATE_TIME_INPUT, DateFormatter, FormatterSettings, SAO_PAULO_OFFSET_SECS};
pub use range::{
    ADULT_AGE_YEARS, is_at_least_18_years_old_on, is_at_least_years_old_on, is_future_date_on,
    is_past_date_on,
};
pub use timestamp::Timestamp;

use chrono::{Datelike, Timelike};

use crate::core::DateTimeError;

/// `DD/MM/YYYY` in Sao Paulo time.
pub fn format_date(ts: impl Into<Timestamp>) -> Result<String, DateTimeError> {
    DateFormatter::default().format_date(ts)
}

/// `HH:mm` in Sao Paulo time.
pub fn format_time(ts: impl Into<Timestamp>) -> Result<String, DateTimeError> {
    DateFormatter::default().format_time(ts)
}

/// `DD/MM/YYYY HH:mm` in Sao Paulo time.
pub fn format_date_time(ts: impl Into<Timestamp>) -> Result<String, DateTimeError> {
    DateFormatter::default().format_date_time(ts)
}

/// Epoch milliseconds (as a string) of a `DD/MM/YYYY HH:mm` Sao Paulo time.
pub fn to_timestamp(input: &str) -> Result<String, DateTimeError> {
    DateFormatter::default().to_timestamp(input)
}

/// `YYYY-MM-DDTHH:mm:ss-03:00` from a date and a clock time.
pub fn combine_date_time_string<D: Datelike, T: Timelike>(date: &D, time: &T) -> String {
    DateFormatter::default().combine_date_time_string(date, time)
}

/// Calendar date of `ts` in Sao Paulo is after today.
pub fn is_future_date(ts: impl Into<Timestamp>) -> Result<bool, DateTimeError> {
    DateFormatter::default().is_future_date(ts)
}

/// Calendar date of `ts` in Sao Paulo is before today.
pub fn is_past_date(ts: impl Into<Timestamp>) -> Result<bool, DateTimeError> {
    DateFormatter::default().is_past_date(ts)
}

pub fn is_at_least_18_years_old(birth: impl Into<Timestamp>) -> Result<bool, DateTimeError> {
    DateFormatter::default().is_at_least_18_years_old(birth)
}
