// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! "Today" providers.
//!
//! The engine never reads a clock itself; sessions ask a `Clock` once per
//! operation and pass the date down explicitly.

use crate::error::CoreError;
use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use time::{Date, Month};

/// Supplies the current calendar date.
pub trait Clock {
    /// Returns today's date.
    ///
    /// # Errors
    ///
    /// Returns an error if the date cannot be represented.
    fn today(&self) -> Result<Date, CoreError>;
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    today: Date,
}

impl FixedClock {
    /// Creates a clock that always reports `today`.
    #[must_use]
    pub const fn new(today: Date) -> Self {
        Self { today }
    }

    /// Moves the clock to another date.
    pub const fn set(&mut self, today: Date) {
        self.today = today;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Result<Date, CoreError> {
        Ok(self.today)
    }
}

/// The wall clock, read as a local date in a declared timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    timezone: Tz,
}

impl SystemClock {
    /// Creates a system clock for an IANA timezone name.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTimezone` if the name is unknown.
    pub fn new(timezone: &str) -> Result<Self, CoreError> {
        let timezone: Tz = timezone
            .parse()
            .map_err(|_| CoreError::InvalidTimezone(timezone.to_string()))?;
        Ok(Self { timezone })
    }

    /// Creates a system clock reading UTC dates.
    #[must_use]
    pub const fn utc() -> Self {
        Self { timezone: Tz::UTC }
    }

    /// Returns the configured timezone.
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }
}

impl Clock for SystemClock {
    fn today(&self) -> Result<Date, CoreError> {
        let local: NaiveDate = Utc::now().with_timezone(&self.timezone).date_naive();
        naive_to_date(local)
    }
}

/// Converts a chrono calendar date to a `time::Date`.
fn naive_to_date(date: NaiveDate) -> Result<Date, CoreError> {
    let month: Month = u8::try_from(date.month())
        .ok()
        .and_then(|month| Month::try_from(month).ok())
        .ok_or_else(|| CoreError::Clock(format!("Invalid month in {date}")))?;
    let day: u8 =
        u8::try_from(date.day()).map_err(|_| CoreError::Clock(format!("Invalid day in {date}")))?;

    Date::from_calendar_date(date.year(), month, day).map_err(|e| CoreError::Clock(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_fixed_clock_reports_its_date() {
        let mut clock: FixedClock = FixedClock::new(date!(2024 - 01 - 07));
        assert_eq!(clock.today().unwrap(), date!(2024 - 01 - 07));
        clock.set(date!(2024 - 01 - 14));
        assert_eq!(clock.today().unwrap(), date!(2024 - 01 - 14));
    }

    #[test]
    fn test_system_clock_accepts_iana_name() {
        let clock: SystemClock = SystemClock::new("America/New_York").unwrap();
        assert_eq!(clock.timezone(), Tz::America__New_York);
        assert!(clock.today().is_ok());
    }

    #[test]
    fn test_system_clock_rejects_unknown_zone() {
        assert_eq!(
            SystemClock::new("Mars/Olympus_Mons"),
            Err(CoreError::InvalidTimezone(String::from("Mars/Olympus_Mons")))
        );
    }

    #[test]
    fn test_naive_to_date_conversion() {
        let naive: NaiveDate = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(naive_to_date(naive).unwrap(), date!(2024 - 02 - 29));
    }

    #[test]
    fn test_utc_clock_matches_utc_name() {
        assert_eq!(SystemClock::utc(), SystemClock::new("UTC").unwrap());
    }
}
