// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar helpers shared by the recurrence and progress modules.
//!
//! Weeks start on Sunday everywhere in this crate. The same convention
//! indexes day-state arrays, identifies weeks for rollover, and counts
//! weeks for every-other parity.

use crate::error::DomainError;
use time::format_description::FormatItem;
use time::macros::{date, format_description};
use time::{Date, Duration};

/// The fixed Monday every-other parity is counted from.
pub const REFERENCE_MONDAY: Date = date!(1970 - 01 - 05);

/// Storage format for calendar dates (`yyyy-MM-dd`).
pub const ISO_DATE: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Parses a strict `yyyy-MM-dd` date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the text is not exactly ten
/// characters or does not name a valid calendar date.
pub fn parse_iso_date(raw: &str) -> Result<Date, DomainError> {
    if raw.len() != 10 {
        return Err(DomainError::DateParseError {
            date_string: raw.to_string(),
            error: String::from("expected yyyy-MM-dd"),
        });
    }

    Date::parse(raw, ISO_DATE).map_err(|e| DomainError::DateParseError {
        date_string: raw.to_string(),
        error: e.to_string(),
    })
}

/// Returns the Sunday on or before `date`.
#[must_use]
pub fn start_of_week(date: Date) -> Date {
    let offset: u8 = date.weekday().number_days_from_sunday();
    date.saturating_sub(Duration::days(i64::from(offset)))
}

/// Counts whole weeks from the week containing `from` to the week containing `to`.
///
/// Negative when `to` lies in an earlier week.
#[must_use]
pub fn weeks_between(from: Date, to: Date) -> i64 {
    (start_of_week(to) - start_of_week(from)).whole_weeks()
}

/// Adds whole days, saturating at the representable calendar bounds.
#[must_use]
pub fn add_days(date: Date, days: i64) -> Date {
    date.saturating_add(Duration::days(days))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_monday_is_a_monday() {
        assert_eq!(REFERENCE_MONDAY.weekday(), time::Weekday::Monday);
    }

    #[test]
    fn test_parse_iso_date_valid() {
        assert_eq!(parse_iso_date("2024-01-07").unwrap(), date!(2024 - 01 - 07));
    }

    #[test]
    fn test_parse_iso_date_rejects_short_form() {
        assert!(matches!(
            parse_iso_date("2024-1-7"),
            Err(DomainError::DateParseError { .. })
        ));
    }

    #[test]
    fn test_parse_iso_date_rejects_impossible_day() {
        assert!(parse_iso_date("2023-02-29").is_err());
    }

    #[test]
    fn test_parse_iso_date_rejects_trailing_text() {
        assert!(parse_iso_date("2024-01-07 (Next: 2024-01-08)").is_err());
    }

    #[test]
    fn test_start_of_week_sunday_is_itself() {
        assert_eq!(start_of_week(date!(2024 - 01 - 07)), date!(2024 - 01 - 07));
    }

    #[test]
    fn test_start_of_week_saturday_goes_back_six_days() {
        assert_eq!(start_of_week(date!(2024 - 01 - 13)), date!(2024 - 01 - 07));
    }

    #[test]
    fn test_start_of_week_crosses_year_boundary() {
        assert_eq!(start_of_week(date!(2025 - 01 - 01)), date!(2024 - 12 - 29));
    }

    #[test]
    fn test_weeks_between_same_week() {
        assert_eq!(weeks_between(date!(2024 - 01 - 07), date!(2024 - 01 - 13)), 0);
    }

    #[test]
    fn test_weeks_between_from_reference() {
        // 2024-01-07 is 2818 weeks after the Sunday before 1970-01-05.
        assert_eq!(weeks_between(REFERENCE_MONDAY, date!(2024 - 01 - 07)), 2818);
        assert_eq!(weeks_between(REFERENCE_MONDAY, date!(2024 - 01 - 06)), 2817);
    }

    #[test]
    fn test_weeks_between_negative() {
        assert_eq!(weeks_between(date!(2024 - 01 - 14), date!(2024 - 01 - 01)), -2);
    }
}
