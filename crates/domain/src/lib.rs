// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar;
mod day_state;
mod error;
mod goal;
mod occurrence;
mod overage;
mod recurrence;
mod week;
mod weekday;
mod weekly_record;

#[cfg(test)]
mod tests;

// Re-export public types
pub use calendar::{ISO_DATE, REFERENCE_MONDAY, parse_iso_date, start_of_week, weeks_between};
pub use day_state::{DayState, DayStates};
pub use error::DomainError;
pub use goal::{Goal, GoalRow, rollover_if_needed};
pub use occurrence::next_occurrence;
pub use overage::{OVERAGE_DISPLAY_CAP, overage};
pub use recurrence::{Parity, ParsedRecurrence, RecurrenceRule};
pub use week::WeekId;
pub use weekday::{Weekday, WeekdaySet};
pub use weekly_record::{WeeklyRecord, WeeklyRecordRow};
