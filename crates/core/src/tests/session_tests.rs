// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    ReadOnlyGoalStore, TEST_TODAY, TestSession, create_fresh_goal, create_test_goal,
    start_test_session,
};
use crate::{
    ArchivedWeek, CoreError, FixedClock, GoalCommand, GoalStore, InMemoryCompletionLog,
    InMemoryGoalStore, Session, SessionStart, begin_session,
};
use cadence_domain::{Goal, WeekId, Weekday, WeeklyRecord};
use time::macros::date;

#[test]
fn test_begin_session_rolls_only_stale_goals() {
    let goals: Vec<Goal> = vec![
        create_test_goal(1, 3, "-C-C---", date!(2024 - 01 - 03)),
        create_test_goal(2, 2, "C------", TEST_TODAY),
    ];

    let start: SessionStart = begin_session(goals, TEST_TODAY);

    assert_eq!(start.week, WeekId::containing(TEST_TODAY));
    assert_eq!(start.archived.len(), 1);
    assert_eq!(start.archived[0].goal_id, 1);
    assert_eq!(start.archived[0].record.completed(), 2);
    assert_eq!(start.goals[0].day_states().to_string(), "-------");
    assert_eq!(start.goals[1].day_states().to_string(), "C------");
}

#[test]
fn test_begin_session_twice_archives_once() {
    let goals: Vec<Goal> = vec![create_test_goal(1, 3, "-C-C---", date!(2024 - 01 - 03))];

    let first: SessionStart = begin_session(goals, TEST_TODAY);
    let second: SessionStart = begin_session(first.goals.clone(), TEST_TODAY);

    assert_eq!(first.archived.len(), 1);
    assert!(second.archived.is_empty());
    assert_eq!(second.goals, first.goals);
}

#[test]
fn test_session_start_persists_rollover() {
    let stale: Goal = create_test_goal(1, 3, "-C-C---", date!(2024 - 01 - 03));
    let (session, archived): (TestSession, Vec<ArchivedWeek>) = Session::start(
        InMemoryGoalStore::with_goals(vec![stale, create_fresh_goal(2, 1)]),
        InMemoryCompletionLog::new(),
        FixedClock::new(TEST_TODAY),
    )
    .unwrap();

    assert_eq!(archived.len(), 1);
    assert_eq!(session.store().history(), archived.as_slice());
    let stored: Goal = session.store().load_goal(1).unwrap().unwrap();
    assert_eq!(stored.week_id(), WeekId::containing(TEST_TODAY));
    assert_eq!(stored.remaining(), 3);
}

#[test]
fn test_execute_keeps_completion_log_in_step() {
    let mut session: TestSession = start_test_session(vec![create_fresh_goal(1, 2)], TEST_TODAY);

    session
        .execute(
            1,
            GoalCommand::MarkComplete {
                day: Weekday::Tuesday,
            },
        )
        .unwrap();
    assert!(session.log().contains(1, date!(2024 - 01 - 09)));

    session
        .execute(
            1,
            GoalCommand::MarkMissed {
                day: Weekday::Tuesday,
            },
        )
        .unwrap();
    assert!(!session.log().contains(1, date!(2024 - 01 - 09)));
    assert!(session.log().is_empty());

    let stored: Goal = session.store().load_goal(1).unwrap().unwrap();
    assert_eq!(stored.day_states().to_string(), "--M----");
    assert_eq!(stored.remaining(), 2);
}

#[test]
fn test_execute_unknown_goal() {
    let mut session: TestSession = start_test_session(Vec::new(), TEST_TODAY);
    let result = session.execute(99, GoalCommand::Rollover);
    assert!(matches!(result, Err(CoreError::GoalNotFound(99))));
}

#[test]
fn test_session_across_week_boundary_requires_rollover() {
    let mut session: TestSession = start_test_session(vec![create_fresh_goal(1, 2)], TEST_TODAY);
    session
        .execute(
            1,
            GoalCommand::MarkComplete {
                day: Weekday::Wednesday,
            },
        )
        .unwrap();

    session.clock_mut().set(date!(2024 - 01 - 15));
    let result = session.execute(
        1,
        GoalCommand::MarkComplete {
            day: Weekday::Monday,
        },
    );
    assert!(matches!(result, Err(CoreError::StaleWeek { goal_id: 1, .. })));

    let records: Vec<WeeklyRecord> = session.refresh().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].day_states().to_string(), "---C---");
    assert_eq!(records[0].week_start(), date!(2024 - 01 - 07));
    assert_eq!(session.week(), WeekId::containing(date!(2024 - 01 - 15)));

    session
        .execute(
            1,
            GoalCommand::MarkComplete {
                day: Weekday::Monday,
            },
        )
        .unwrap();
    assert_eq!(session.store().history_for(1).count(), 1);
    assert_eq!(session.log().len(), 2);
}

#[test]
fn test_execute_rollover_appends_history() {
    let mut session: TestSession = start_test_session(vec![create_fresh_goal(1, 1)], TEST_TODAY);
    session.clock_mut().set(date!(2024 - 01 - 13));
    assert!(session.execute(1, GoalCommand::Rollover).unwrap().record.is_none());

    session.clock_mut().set(date!(2024 - 01 - 14));
    let record: WeeklyRecord = session
        .execute(1, GoalCommand::Rollover)
        .unwrap()
        .record
        .unwrap();
    assert_eq!(record.week_start(), date!(2024 - 01 - 07));
    assert_eq!(session.store().history().len(), 1);
    assert_eq!(session.week(), WeekId::containing(date!(2024 - 01 - 14)));
}

#[test]
fn test_failed_goal_save_leaves_completion_log_untouched() {
    let store: ReadOnlyGoalStore = ReadOnlyGoalStore {
        inner: InMemoryGoalStore::with_goals(vec![create_fresh_goal(1, 2)]),
    };
    let (mut session, _archived): (
        Session<ReadOnlyGoalStore, InMemoryCompletionLog, FixedClock>,
        Vec<ArchivedWeek>,
    ) = Session::start(store, InMemoryCompletionLog::new(), FixedClock::new(TEST_TODAY)).unwrap();

    let result = session.execute(
        1,
        GoalCommand::MarkComplete {
            day: Weekday::Monday,
        },
    );

    assert_eq!(
        result,
        Err(CoreError::Store(String::from("read-only")))
    );
    assert!(session.log().is_empty());
    let stored: Goal = session.store().load_goal(1).unwrap().unwrap();
    assert!(stored.day_states().is_untouched());
}
