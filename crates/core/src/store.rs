// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collaborator seams for persistence.
//!
//! The engine only describes what must be stored. Real applications back
//! these traits with their own database; the in-memory implementations
//! serve tests and the command-line tool.

use crate::error::CoreError;
use cadence_domain::{Goal, WeeklyRecord};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use time::Date;

/// An archived week tagged with the goal it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchivedWeek {
    /// The goal identifier.
    pub goal_id: i64,
    /// The archived snapshot.
    pub record: WeeklyRecord,
}

/// Loads and saves goals and appends weekly history.
///
/// `Session::execute` writes here before it updates the [`CompletionLog`].
/// The two are not updated atomically: an implementation backed by the same
/// database as its log should run each `execute` in one transaction.
pub trait GoalStore {
    /// Loads every goal.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails.
    fn load_goals(&self) -> Result<Vec<Goal>, CoreError>;

    /// Loads one goal, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails.
    fn load_goal(&self, goal_id: i64) -> Result<Option<Goal>, CoreError>;

    /// Inserts or replaces a goal.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails.
    fn save_goal(&mut self, goal: &Goal) -> Result<(), CoreError>;

    /// Appends an archived week to the goal's history.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails.
    fn append_record(&mut self, goal_id: i64, record: &WeeklyRecord) -> Result<(), CoreError>;
}

/// Keeps the per-day completion entries that mirror `Complete` day states.
pub trait CompletionLog {
    /// Records a completion for `goal_id` on `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails.
    fn record(&mut self, goal_id: i64, date: Date) -> Result<(), CoreError>;

    /// Deletes the completion for `goal_id` on `date`, returning whether one existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails.
    fn retract(&mut self, goal_id: i64, date: Date) -> Result<bool, CoreError>;
}

/// A goal store held entirely in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryGoalStore {
    goals: BTreeMap<i64, Goal>,
    history: Vec<ArchivedWeek>,
}

impl InMemoryGoalStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            goals: BTreeMap::new(),
            history: Vec::new(),
        }
    }

    /// Creates a store pre-filled with goals.
    #[must_use]
    pub fn with_goals<I>(goals: I) -> Self
    where
        I: IntoIterator<Item = Goal>,
    {
        Self {
            goals: goals.into_iter().map(|goal| (goal.id(), goal)).collect(),
            history: Vec::new(),
        }
    }

    /// Returns every archived week in append order.
    #[must_use]
    pub fn history(&self) -> &[ArchivedWeek] {
        &self.history
    }

    /// Returns the archived weeks of one goal in append order.
    pub fn history_for(&self, goal_id: i64) -> impl Iterator<Item = &WeeklyRecord> {
        self.history
            .iter()
            .filter(move |archived| archived.goal_id == goal_id)
            .map(|archived| &archived.record)
    }
}

impl GoalStore for InMemoryGoalStore {
    fn load_goals(&self) -> Result<Vec<Goal>, CoreError> {
        Ok(self.goals.values().cloned().collect())
    }

    fn load_goal(&self, goal_id: i64) -> Result<Option<Goal>, CoreError> {
        Ok(self.goals.get(&goal_id).cloned())
    }

    fn save_goal(&mut self, goal: &Goal) -> Result<(), CoreError> {
        self.goals.insert(goal.id(), goal.clone());
        Ok(())
    }

    fn append_record(&mut self, goal_id: i64, record: &WeeklyRecord) -> Result<(), CoreError> {
        self.history.push(ArchivedWeek {
            goal_id,
            record: record.clone(),
        });
        Ok(())
    }
}

/// A completion log held entirely in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryCompletionLog {
    entries: BTreeSet<(i64, Date)>,
}

impl InMemoryCompletionLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeSet::new(),
        }
    }

    /// Returns whether a completion exists for `goal_id` on `date`.
    #[must_use]
    pub fn contains(&self, goal_id: i64, date: Date) -> bool {
        self.entries.contains(&(goal_id, date))
    }

    /// Returns the number of completion entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the log holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CompletionLog for InMemoryCompletionLog {
    fn record(&mut self, goal_id: i64, date: Date) -> Result<(), CoreError> {
        self.entries.insert((goal_id, date));
        Ok(())
    }

    fn retract(&mut self, goal_id: i64, date: Date) -> Result<bool, CoreError> {
        Ok(self.entries.remove(&(goal_id, date)))
    }
}
