// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session lifecycle.
//!
//! A session starts by rolling every goal into the current week, so that
//! nothing reads `remaining` or day states from a stale week. After that,
//! commands are applied one goal at a time and their side effects are
//! carried out against the completion log.

use crate::apply::{Effect, Transition, apply};
use crate::clock::Clock;
use crate::command::GoalCommand;
use crate::error::CoreError;
use crate::store::{ArchivedWeek, CompletionLog, GoalStore};
use cadence_domain::{Goal, WeekId, WeeklyRecord};
use time::Date;
use tracing::{debug, info};

/// The outcome of rolling a batch of goals at session start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStart {
    /// The week containing the session's date.
    pub week: WeekId,
    /// Every goal, rolled into `week` where needed, in input order.
    pub goals: Vec<Goal>,
    /// The weeks archived by this session start.
    pub archived: Vec<ArchivedWeek>,
}

/// Rolls every goal into the week containing `today`.
///
/// Pure apart from logging: the caller persists the returned goals and
/// archived weeks.
#[must_use]
pub fn begin_session(goals: Vec<Goal>, today: Date) -> SessionStart {
    let week: WeekId = WeekId::containing(today);
    let mut archived: Vec<ArchivedWeek> = Vec::new();

    let goals: Vec<Goal> = goals
        .into_iter()
        .map(|mut goal| {
            if let Some(record) = goal.rollover_if_needed(week) {
                info!(
                    goal_id = goal.id(),
                    completed = record.completed(),
                    frequency = record.frequency(),
                    overage = record.overage_count(),
                    week_start = %record.week_start(),
                    "Archived week"
                );
                archived.push(ArchivedWeek {
                    goal_id: goal.id(),
                    record,
                });
            }
            goal
        })
        .collect();

    debug!(
        %week,
        goals = goals.len(),
        archived = archived.len(),
        "Session started"
    );

    SessionStart {
        week,
        goals,
        archived,
    }
}

/// A running session over a goal store.
///
/// Single-writer: all mutation goes through `&mut self`, which serializes
/// commands per goal.
#[derive(Debug)]
pub struct Session<S, L, C> {
    store: S,
    log: L,
    clock: C,
    week: WeekId,
}

impl<S, L, C> Session<S, L, C>
where
    S: GoalStore,
    L: CompletionLog,
    C: Clock,
{
    /// Starts a session: rolls every stored goal and persists the results.
    ///
    /// # Returns
    ///
    /// The session together with the weeks archived while starting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the clock or the store fails.
    pub fn start(mut store: S, log: L, clock: C) -> Result<(Self, Vec<ArchivedWeek>), CoreError> {
        let today: Date = clock.today()?;
        let start: SessionStart = begin_session(store.load_goals()?, today);

        for archived in &start.archived {
            store.append_record(archived.goal_id, &archived.record)?;
        }
        for goal in start
            .goals
            .iter()
            .filter(|goal| start.archived.iter().any(|a| a.goal_id == goal.id()))
        {
            store.save_goal(goal)?;
        }

        let session: Self = Self {
            store,
            log,
            clock,
            week: start.week,
        };
        Ok((session, start.archived))
    }

    /// Applies a command to one stored goal and persists the outcome.
    ///
    /// The goal (and any archived week) is written before the command's
    /// effects reach the completion log. Stores that share a backend with
    /// the log should wrap the whole call in one transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The goal does not exist
    /// - The goal holds a stale week (see `GoalCommand::Rollover`)
    /// - The clock, store or completion log fails
    pub fn execute(&mut self, goal_id: i64, command: GoalCommand) -> Result<Transition, CoreError> {
        let today: Date = self.clock.today()?;
        let goal: Goal = self
            .store
            .load_goal(goal_id)?
            .ok_or(CoreError::GoalNotFound(goal_id))?;

        let transition: Transition = apply(&goal, command, today)?;

        // The goal is persisted before the completion log is touched, so a
        // failed save leaves both unchanged.
        if let Some(record) = &transition.record {
            self.store.append_record(goal_id, record)?;
        }
        self.store.save_goal(&transition.goal)?;
        if transition.record.is_some() {
            self.week = transition.goal.week_id();
        }

        for effect in &transition.effects {
            match *effect {
                Effect::RecordCompletion { goal_id, date } => self.log.record(goal_id, date)?,
                Effect::RetractCompletion { goal_id, date } => {
                    if !self.log.retract(goal_id, date)? {
                        debug!(goal_id, %date, "No completion entry to retract");
                    }
                }
            }
        }

        debug!(
            goal_id,
            command = command.name(),
            remaining = transition.goal.remaining(),
            "Applied command"
        );

        Ok(transition)
    }

    /// Rolls every stored goal into the current week again.
    ///
    /// Useful when a session outlives a week boundary.
    ///
    /// # Errors
    ///
    /// Returns an error if the clock or the store fails.
    pub fn refresh(&mut self) -> Result<Vec<WeeklyRecord>, CoreError> {
        let today: Date = self.clock.today()?;
        let start: SessionStart = begin_session(self.store.load_goals()?, today);

        for archived in &start.archived {
            self.store.append_record(archived.goal_id, &archived.record)?;
        }
        for goal in &start.goals {
            self.store.save_goal(goal)?;
        }
        self.week = start.week;

        Ok(start
            .archived
            .into_iter()
            .map(|archived| archived.record)
            .collect())
    }

    /// Returns the week the session last rolled goals into.
    #[must_use]
    pub const fn week(&self) -> WeekId {
        self.week
    }

    /// Returns the goal store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the completion log.
    #[must_use]
    pub const fn log(&self) -> &L {
        &self.log
    }

    /// Returns the clock for adjustment.
    pub const fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
