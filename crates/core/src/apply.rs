// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::GoalCommand;
use crate::error::CoreError;
use cadence_domain::{DayState, Goal, WeekId, Weekday, WeeklyRecord};
use time::Date;

/// A side effect the caller must carry out against its completion log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// A day became complete; record a daily completion for `date`.
    RecordCompletion {
        /// The goal identifier.
        goal_id: i64,
        /// The calendar date of the completed day.
        date: Date,
    },
    /// A complete day was undone; delete the daily completion for `date`.
    RetractCompletion {
        /// The goal identifier.
        goal_id: i64,
        /// The calendar date of the retracted day.
        date: Date,
    },
}

/// The result of applying a command to a goal.
///
/// Transitions are atomic: the input goal is never modified, and on error
/// nothing is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The goal after the command.
    pub goal: Goal,
    /// The archived week, when the command rolled the goal over.
    pub record: Option<WeeklyRecord>,
    /// Completion-log changes the caller must perform.
    pub effects: Vec<Effect>,
}

/// Applies a command to a goal as of `today`.
///
/// # Arguments
///
/// * `goal` - The current goal (immutable)
/// * `command` - The change to apply
/// * `today` - The caller's current date
///
/// # Errors
///
/// Returns `CoreError::StaleWeek` if a day-marking command targets a goal
/// that has not been rolled into the week containing `today`.
pub fn apply(goal: &Goal, command: GoalCommand, today: Date) -> Result<Transition, CoreError> {
    let current: WeekId = WeekId::containing(today);
    let mut new_goal: Goal = goal.clone();
    let mut effects: Vec<Effect> = Vec::new();

    match command {
        GoalCommand::Rollover => {
            let record: Option<WeeklyRecord> = new_goal.rollover_if_needed(current);
            return Ok(Transition {
                goal: new_goal,
                record,
                effects,
            });
        }
        GoalCommand::MarkComplete { day } => {
            ensure_current_week(goal, current)?;
            if new_goal.mark_complete(day, today) != DayState::Complete {
                effects.push(Effect::RecordCompletion {
                    goal_id: goal.id(),
                    date: completion_date(goal, day),
                });
            }
        }
        GoalCommand::MarkMissed { day } => {
            ensure_current_week(goal, current)?;
            if new_goal.mark_missed(day) == DayState::Complete {
                effects.push(retraction(goal, day));
            }
        }
        GoalCommand::MarkOpen { day } => {
            ensure_current_week(goal, current)?;
            if new_goal.mark_open(day) == DayState::Complete {
                effects.push(retraction(goal, day));
            }
        }
    }

    Ok(Transition {
        goal: new_goal,
        record: None,
        effects,
    })
}

fn ensure_current_week(goal: &Goal, current: WeekId) -> Result<(), CoreError> {
    if goal.week_id() != current {
        return Err(CoreError::StaleWeek {
            goal_id: goal.id(),
            goal_week: goal.week_id(),
            current_week: current,
        });
    }
    Ok(())
}

fn completion_date(goal: &Goal, day: Weekday) -> Date {
    goal.week_id().date_of(day)
}

fn retraction(goal: &Goal, day: Weekday) -> Effect {
    Effect::RetractCompletion {
        goal_id: goal.id(),
        date: completion_date(goal, day),
    }
}
