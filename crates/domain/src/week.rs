// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::{add_days, parse_iso_date, start_of_week};
use crate::error::DomainError;
use crate::weekday::Weekday;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Identifies one calendar week.
///
/// A week runs Sunday through Saturday and is identified by its Sunday,
/// so identifiers are unique across years and order chronologically.
/// Stored as the ISO date of that Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeekId {
    /// The Sunday that starts the week.
    start: Date,
}

impl WeekId {
    /// Returns the week containing `date`.
    #[must_use]
    pub fn containing(date: Date) -> Self {
        Self {
            start: start_of_week(date),
        }
    }

    /// Creates a week identifier from the Sunday that starts it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWeekStart` if `start` is not a Sunday.
    pub fn from_start(start: Date) -> Result<Self, DomainError> {
        if start.weekday() != time::Weekday::Sunday {
            return Err(DomainError::InvalidWeekStart {
                date: start,
                weekday: start.weekday(),
            });
        }
        Ok(Self { start })
    }

    /// Returns the first day (Sunday) of the week.
    #[must_use]
    pub const fn start(self) -> Date {
        self.start
    }

    /// Returns the last day (Saturday) of the week.
    #[must_use]
    pub fn end(self) -> Date {
        add_days(self.start, 6)
    }

    /// Returns the week before this one.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::containing(add_days(self.start, -7))
    }

    /// Returns the week after this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self::containing(add_days(self.start, 7))
    }

    /// Returns whether `date` falls inside this week.
    #[must_use]
    pub fn contains(self, date: Date) -> bool {
        start_of_week(date) == self.start
    }

    /// Returns the calendar date of `day` within this week.
    #[must_use]
    pub fn date_of(self, day: Weekday) -> Date {
        add_days(self.start, i64::from(day.index()))
    }
}

impl std::fmt::Display for WeekId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.start)
    }
}

impl FromStr for WeekId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_start(parse_iso_date(s)?)
    }
}

impl TryFrom<String> for WeekId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WeekId> for String {
    fn from(week: WeekId) -> Self {
        week.to_string()
    }
}
