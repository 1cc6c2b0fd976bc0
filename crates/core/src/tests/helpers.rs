// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CoreError, FixedClock, GoalStore, InMemoryCompletionLog, InMemoryGoalStore, Session};
use cadence_domain::{DayStates, Goal, WeekId, WeeklyRecord};
use time::Date;
use time::macros::date;

/// A Wednesday in the week starting 2024-01-07.
pub const TEST_TODAY: Date = date!(2024 - 01 - 10);

pub type TestSession = Session<InMemoryGoalStore, InMemoryCompletionLog, FixedClock>;

pub fn create_test_goal(id: i64, frequency: u32, day_states: &str, week_of: Date) -> Goal {
    let states: DayStates = day_states.parse().unwrap();
    Goal::restore(
        id,
        format!("Goal {id}"),
        frequency,
        states,
        None,
        WeekId::containing(week_of),
    )
    .unwrap()
}

pub fn create_fresh_goal(id: i64, frequency: u32) -> Goal {
    create_test_goal(id, frequency, "-------", TEST_TODAY)
}

pub fn start_test_session(goals: Vec<Goal>, today: Date) -> TestSession {
    let (session, _archived) = Session::start(
        InMemoryGoalStore::with_goals(goals),
        InMemoryCompletionLog::new(),
        FixedClock::new(today),
    )
    .unwrap();
    session
}

/// A goal store whose writes to goals always fail.
#[derive(Debug, Default)]
pub struct ReadOnlyGoalStore {
    pub inner: InMemoryGoalStore,
}

impl GoalStore for ReadOnlyGoalStore {
    fn load_goals(&self) -> Result<Vec<Goal>, CoreError> {
        self.inner.load_goals()
    }

    fn load_goal(&self, goal_id: i64) -> Result<Option<Goal>, CoreError> {
        self.inner.load_goal(goal_id)
    }

    fn save_goal(&mut self, _goal: &Goal) -> Result<(), CoreError> {
        Err(CoreError::Store(String::from("read-only")))
    }

    fn append_record(&mut self, goal_id: i64, record: &WeeklyRecord) -> Result<(), CoreError> {
        self.inner.append_record(goal_id, record)
    }
}
