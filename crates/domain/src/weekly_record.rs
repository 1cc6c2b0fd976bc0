// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Archived weekly snapshots of goal progress.

use crate::calendar::{add_days, parse_iso_date};
use crate::day_state::DayStates;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;

/// An immutable snapshot of one goal's finished week.
///
/// Records are produced only by rollover and are never mutated afterwards.
/// History storage owns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WeeklyRecordRow", into = "WeeklyRecordRow")]
pub struct WeeklyRecord {
    header: String,
    completed: u32,
    frequency: u32,
    week_start: Date,
    day_states: DayStates,
    overage_count: u32,
}

impl WeeklyRecord {
    pub(crate) const fn new(
        header: String,
        completed: u32,
        frequency: u32,
        week_start: Date,
        day_states: DayStates,
        overage_count: u32,
    ) -> Self {
        Self {
            header,
            completed,
            frequency,
            week_start,
            day_states,
            overage_count,
        }
    }

    /// Returns the goal header copied at archive time.
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Returns the number of completed days in the archived week.
    #[must_use]
    pub const fn completed(&self) -> u32 {
        self.completed
    }

    /// Returns the weekly target in force when the week was archived.
    #[must_use]
    pub const fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Returns the first day (Sunday) of the archived week.
    #[must_use]
    pub const fn week_start(&self) -> Date {
        self.week_start
    }

    /// Returns the last day of the archived week (`week_start` + 6 days).
    #[must_use]
    pub fn week_end(&self) -> Date {
        add_days(self.week_start, 6)
    }

    /// Returns the day states exactly as they stood before rollover.
    #[must_use]
    pub const fn day_states(&self) -> &DayStates {
        &self.day_states
    }

    /// Returns the capped overage for display.
    #[must_use]
    pub const fn overage_count(&self) -> u32 {
        self.overage_count
    }

    /// Returns whether the weekly target was reached.
    #[must_use]
    pub const fn met_target(&self) -> bool {
        self.completed >= self.frequency
    }
}

/// Storage form of a [`WeeklyRecord`].
///
/// Dates are ISO strings and day states use the 7-character encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyRecordRow {
    pub header: String,
    pub completed: u32,
    pub frequency: u32,
    pub week_start: String,
    pub week_end: String,
    pub day_states: String,
    pub overage_count: u32,
}

impl From<WeeklyRecord> for WeeklyRecordRow {
    fn from(record: WeeklyRecord) -> Self {
        Self {
            week_end: record.week_end().to_string(),
            week_start: record.week_start.to_string(),
            day_states: record.day_states.to_string(),
            header: record.header,
            completed: record.completed,
            frequency: record.frequency,
            overage_count: record.overage_count,
        }
    }
}

impl TryFrom<WeeklyRecordRow> for WeeklyRecord {
    type Error = DomainError;

    /// Decodes a stored row.
    ///
    /// The stored counts are kept as written; only the dates and day-state
    /// string are validated.
    fn try_from(row: WeeklyRecordRow) -> Result<Self, Self::Error> {
        let week_start: Date = parse_iso_date(&row.week_start)?;
        let week_end: Date = parse_iso_date(&row.week_end)?;
        if add_days(week_start, 6) != week_end {
            return Err(DomainError::InvalidRecordSpan {
                start: week_start,
                end: week_end,
            });
        }

        Ok(Self {
            header: row.header,
            completed: row.completed,
            frequency: row.frequency,
            week_start,
            day_states: row.day_states.parse()?,
            overage_count: row.overage_count,
        })
    }
}
