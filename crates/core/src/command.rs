// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cadence_domain::Weekday;

/// A change requested against one goal, as data only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalCommand {
    /// Mark a day of the current week complete.
    MarkComplete {
        /// The day to mark.
        day: Weekday,
    },
    /// Mark a day of the current week missed.
    MarkMissed {
        /// The day to mark.
        day: Weekday,
    },
    /// Clear a day of the current week back to open.
    MarkOpen {
        /// The day to clear.
        day: Weekday,
    },
    /// Archive the previous week if the goal still holds it.
    Rollover,
}

impl GoalCommand {
    /// Returns the command name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MarkComplete { .. } => "MarkComplete",
            Self::MarkMissed { .. } => "MarkMissed",
            Self::MarkOpen { .. } => "MarkOpen",
            Self::Rollover => "Rollover",
        }
    }
}
