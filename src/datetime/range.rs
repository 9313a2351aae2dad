//! Calendar-date comparisons against an explicit "today".
//!
//! The `_on` variants take today's date as an argument so callers (and
//! tests) control the clock; [`DateFormatter`](super::DateFormatter) supplies
//! the real date in its zone.

use chrono::{Months, NaiveDate};

/// Legal age for volunteer sign-up.
pub const ADULT_AGE_YEARS: u32 = 18;

/// Strictly after `today`.
pub fn is_future_date_on(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

/// Strictly before `today`.
pub fn is_past_date_on(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

/// True iff `birth_date` is on or before `today` minus `years` years.
///
/// The threshold keeps month and day; a 29 February today falls back to
/// 28 February in non-leap years.
pub fn is_at_least_years_old_on(birth_date: NaiveDate, years: u32, today: NaiveDate) -> bool {
    years
        .checked_mul(12)
        .and_then(|months| today.checked_sub_months(Months::new(months)))
        .is_some_and(|threshold| birth_date <= threshold)
}

pub fn is_at_least_18_years_old_on(birth_date: NaiveDate, today: NaiveDate) -> bool {
    is_at_least_years_old_on(birth_date, ADULT_AGE_YEARS, today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn future_and_past_are_strict() {
        let today = date(2024, 5, 1);
        assert!(!is_future_date_on(today, today));
        assert!(!is_past_date_on(today, today));
        assert!(is_future_date_on(date(2024, 5, 2), today));
        assert!(is_past_date_on(date(2024, 4, 30), today));
    }

    #[test]
    fn eighteenth_birthday_is_inclusive() {
        let today = date(2024, 5, 1);
        assert!(is_at_least_18_years_old_on(date(2006, 5, 1), today));
        assert!(is_at_least_18_years_old_on(date(1990, 1, 1), today));
    }

    #[test]
    fn one_day_short_is_rejected() {
        let today = date(2024, 5, 1);
        assert!(!is_at_least_18_years_old_on(date(2006, 5, 2), today));
    }

    #[test]
    fn leap_day_today() {
        // 2024-02-29 minus 18 years clamps to 2006-02-28.
        let today = date(2024, 2, 29);
        assert!(is_at_least_18_years_old_on(date(2006, 2, 28), today));
        assert!(!is_at_least_18_years_old_on(date(2006, 3, 1), today));
    }

    #[test]
    fn leap_day_birth() {
        let birth = date(2008, 2, 29);
        assert!(!is_at_least_18_years_old_on(birth, date(2026, 2, 28)));
        assert!(is_at_least_18_years_old_on(birth, date(2026, 3, 1)));
    }

    #[test]
    fn custom_age() {
        let today = date(2024, 5, 1);
        assert!(is_at_least_years_old_on(date(2008, 5, 1), 16, today));
        assert!(!is_at_least_years_old_on(date(2008, 5, 1), 17, today));
        assert!(is_at_least_years_old_on(today, 0, today));
        assert!(!is_at_least_years_old_on(today, u32::MAX, today));
    }
}
