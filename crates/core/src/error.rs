// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cadence_domain::{DomainError, WeekId};
use thiserror::Error;

/// Errors that can occur while running a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
    /// The goal still holds an older week and must be rolled over first.
    #[error("Goal {goal_id} holds week {goal_week} but the current week is {current_week}")]
    StaleWeek {
        /// The goal identifier.
        goal_id: i64,
        /// The week stored on the goal.
        goal_week: WeekId,
        /// The week containing today.
        current_week: WeekId,
    },
    /// The requested goal does not exist in the store.
    #[error("Goal {0} not found")]
    GoalNotFound(i64),
    /// The timezone name is not a known IANA zone.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
    /// The clock produced a date outside the supported calendar.
    #[error("Clock error: {0}")]
    Clock(String),
    /// A store collaborator failed.
    #[error("Store error: {0}")]
    Store(String),
}
