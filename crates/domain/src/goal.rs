// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weekly goal progress and rollover.
//!
//! A goal's live state is the pair `(day_states, week_id)`. Completion
//! counts are always derived from the day states and never stored.
//!
//! ## Rollover
//!
//! Rollover must run once per goal per session, before `remaining` or the
//! day states are trusted. It is driven by the caller, never by a timer.
//! It always archives exactly one week: the week before the current one.
//! A goal left unopened for several weeks keeps only that most recent
//! archive, and its stale day states are filed under that week.
//!
//! Any difference in week triggers rollover, including a current week that
//! is earlier than the goal's (the clock moved back or the timezone
//! changed). The goal's live week is then archived and reset as well.

use crate::calendar::{add_days, parse_iso_date};
use crate::day_state::{DayState, DayStates};
use crate::error::DomainError;
use crate::overage::overage;
use crate::week::WeekId;
use crate::weekday::Weekday;
use crate::weekly_record::WeeklyRecord;
use serde::{Deserialize, Serialize};
use time::Date;

/// A weekly goal with its live progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GoalRow", into = "GoalRow")]
pub struct Goal {
    id: i64,
    header: String,
    frequency: u32,
    day_states: DayStates,
    last_checked_date: Option<Date>,
    week_id: WeekId,
}

impl Goal {
    /// Creates a goal with a fresh week of open days.
    ///
    /// # Arguments
    ///
    /// * `id` - The caller's identifier for the goal
    /// * `header` - Display text
    /// * `frequency` - Target completions per week (at least 1)
    /// * `week_id` - The week the live state belongs to
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFrequency` if `frequency` is zero.
    pub fn new(
        id: i64,
        header: String,
        frequency: u32,
        week_id: WeekId,
    ) -> Result<Self, DomainError> {
        Self::restore(
            id,
            header,
            frequency,
            DayStates::default(),
            None,
            week_id,
        )
    }

    /// Rebuilds a goal from previously stored parts.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFrequency` if `frequency` is zero.
    pub fn restore(
        id: i64,
        header: String,
        frequency: u32,
        day_states: DayStates,
        last_checked_date: Option<Date>,
        week_id: WeekId,
    ) -> Result<Self, DomainError> {
        if frequency == 0 {
            return Err(DomainError::InvalidFrequency { frequency });
        }

        Ok(Self {
            id,
            header,
            frequency,
            day_states,
            last_checked_date,
            week_id,
        })
    }

    /// Returns the goal identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the display text.
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Returns the weekly target.
    #[must_use]
    pub const fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Returns the live day states.
    #[must_use]
    pub const fn day_states(&self) -> &DayStates {
        &self.day_states
    }

    /// Returns the date the goal was last marked complete this week.
    #[must_use]
    pub const fn last_checked_date(&self) -> Option<Date> {
        self.last_checked_date
    }

    /// Returns the week the live state belongs to.
    #[must_use]
    pub const fn week_id(&self) -> WeekId {
        self.week_id
    }

    /// Number of days marked complete this week.
    #[must_use]
    pub fn completed_count(&self) -> u32 {
        self.day_states.completed_count()
    }

    /// Completions still needed to reach the weekly target.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.frequency.saturating_sub(self.completed_count())
    }

    /// Returns whether the weekly target has been reached.
    #[must_use]
    pub fn is_met(&self) -> bool {
        self.remaining() == 0
    }

    /// Changes the header text.
    pub fn rename(&mut self, header: String) {
        self.header = header;
    }

    /// Changes the weekly target. Existing day states are kept.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFrequency` if `frequency` is zero.
    pub const fn set_frequency(&mut self, frequency: u32) -> Result<(), DomainError> {
        if frequency == 0 {
            return Err(DomainError::InvalidFrequency { frequency });
        }
        self.frequency = frequency;
        Ok(())
    }

    /// Marks `day` complete and records `today` as the last check.
    ///
    /// Idempotent when the day is already complete. Returns the previous state.
    pub const fn mark_complete(&mut self, day: Weekday, today: Date) -> DayState {
        self.last_checked_date = Some(today);
        self.day_states.set(day, DayState::Complete)
    }

    /// Marks `day` missed, returning the previous state.
    ///
    /// When the previous state was `Complete`, the caller must retract any
    /// daily completion entry it keeps for that date.
    pub const fn mark_missed(&mut self, day: Weekday) -> DayState {
        self.day_states.set(day, DayState::Missed)
    }

    /// Clears `day` back to open, returning the previous state.
    pub const fn mark_open(&mut self, day: Weekday) -> DayState {
        self.day_states.set(day, DayState::Open)
    }

    /// Archives the previous week and resets live state when `current` differs
    /// from the goal's week.
    ///
    /// Returns `None`, leaving the goal untouched, when the goal already
    /// belongs to `current`.
    pub fn rollover_if_needed(&mut self, current: WeekId) -> Option<WeeklyRecord> {
        rollover_if_needed(self, current, current.start())
    }
}

/// Rolls `goal` into `current` if it still holds an older week.
///
/// `current_start` is the first day of `current`. The archived week is taken
/// to start seven days earlier, whatever week the goal was last in, and even
/// when `current` is before the goal's week.
///
/// # Returns
///
/// * `None` if the goal already belongs to `current`
/// * `Some(WeeklyRecord)` for the archived week otherwise
pub fn rollover_if_needed(
    goal: &mut Goal,
    current: WeekId,
    current_start: Date,
) -> Option<WeeklyRecord> {
    if goal.week_id == current {
        return None;
    }

    let completed: u32 = goal.completed_count();
    let previous_start: Date = add_days(current_start, -7);
    let record: WeeklyRecord = WeeklyRecord::new(
        goal.header.clone(),
        completed,
        goal.frequency,
        previous_start,
        goal.day_states,
        overage(completed, goal.frequency),
    );

    goal.day_states = DayStates::default();
    goal.last_checked_date = None;
    goal.week_id = current;

    Some(record)
}

/// Storage form of a [`Goal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalRow {
    pub id: i64,
    pub header: String,
    pub frequency: u32,
    pub day_states: String,
    pub last_checked_date: Option<String>,
    pub week_id: String,
}

impl From<Goal> for GoalRow {
    fn from(goal: Goal) -> Self {
        Self {
            id: goal.id,
            header: goal.header,
            frequency: goal.frequency,
            day_states: goal.day_states.to_string(),
            last_checked_date: goal.last_checked_date.map(|date| date.to_string()),
            week_id: goal.week_id.to_string(),
        }
    }
}

impl TryFrom<GoalRow> for Goal {
    type Error = DomainError;

    /// Decodes a stored row.
    ///
    /// A corrupt day-state string fails the decode; the caller decides
    /// whether to reset the goal to default states.
    fn try_from(row: GoalRow) -> Result<Self, Self::Error> {
        let last_checked_date: Option<Date> = row
            .last_checked_date
            .as_deref()
            .map(parse_iso_date)
            .transpose()?;

        Self::restore(
            row.id,
            row.header,
            row.frequency,
            row.day_states.parse()?,
            last_checked_date,
            row.week_id.parse()?,
        )
    }
}
