// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{TEST_TODAY, create_fresh_goal, create_test_goal};
use crate::{CoreError, Effect, GoalCommand, Transition, apply};
use cadence_domain::{DayState, Goal, WeekId, Weekday};
use time::macros::date;

#[test]
fn test_mark_complete_returns_new_goal_and_leaves_input_untouched() {
    let goal: Goal = create_fresh_goal(1, 3);
    let transition: Transition = apply(
        &goal,
        GoalCommand::MarkComplete {
            day: Weekday::Monday,
        },
        TEST_TODAY,
    )
    .unwrap();

    assert_eq!(transition.goal.remaining(), 2);
    assert_eq!(transition.goal.last_checked_date(), Some(TEST_TODAY));
    assert_eq!(goal.remaining(), 3);
    assert!(transition.record.is_none());
}

#[test]
fn test_mark_complete_emits_completion_for_weekday_date() {
    let goal: Goal = create_fresh_goal(1, 3);
    let transition: Transition = apply(
        &goal,
        GoalCommand::MarkComplete {
            day: Weekday::Monday,
        },
        TEST_TODAY,
    )
    .unwrap();

    assert_eq!(
        transition.effects,
        vec![Effect::RecordCompletion {
            goal_id: 1,
            date: date!(2024 - 01 - 08),
        }]
    );
}

#[test]
fn test_repeated_mark_complete_emits_nothing() {
    let goal: Goal = create_test_goal(1, 3, "-C-----", TEST_TODAY);
    let transition: Transition = apply(
        &goal,
        GoalCommand::MarkComplete {
            day: Weekday::Monday,
        },
        TEST_TODAY,
    )
    .unwrap();

    assert!(transition.effects.is_empty());
    assert_eq!(transition.goal.completed_count(), 1);
}

#[test]
fn test_mark_missed_on_complete_day_retracts() {
    let goal: Goal = create_test_goal(5, 3, "---C---", TEST_TODAY);
    let transition: Transition = apply(
        &goal,
        GoalCommand::MarkMissed {
            day: Weekday::Wednesday,
        },
        TEST_TODAY,
    )
    .unwrap();

    assert_eq!(
        transition.goal.day_states().get(Weekday::Wednesday),
        DayState::Missed
    );
    assert_eq!(
        transition.effects,
        vec![Effect::RetractCompletion {
            goal_id: 5,
            date: date!(2024 - 01 - 10),
        }]
    );
}

#[test]
fn test_mark_missed_on_open_day_does_not_retract() {
    let goal: Goal = create_fresh_goal(5, 3);
    let transition: Transition = apply(
        &goal,
        GoalCommand::MarkMissed {
            day: Weekday::Tuesday,
        },
        TEST_TODAY,
    )
    .unwrap();

    assert!(transition.effects.is_empty());
}

#[test]
fn test_mark_open_on_complete_day_retracts() {
    let goal: Goal = create_test_goal(5, 3, "C------", TEST_TODAY);
    let transition: Transition = apply(
        &goal,
        GoalCommand::MarkOpen {
            day: Weekday::Sunday,
        },
        TEST_TODAY,
    )
    .unwrap();

    assert!(transition.goal.day_states().is_untouched());
    assert_eq!(
        transition.effects,
        vec![Effect::RetractCompletion {
            goal_id: 5,
            date: date!(2024 - 01 - 07),
        }]
    );
}

#[test]
fn test_marking_stale_goal_is_rejected() {
    let goal: Goal = create_test_goal(2, 3, "-C-----", date!(2024 - 01 - 03));
    let result: Result<Transition, CoreError> = apply(
        &goal,
        GoalCommand::MarkComplete {
            day: Weekday::Friday,
        },
        TEST_TODAY,
    );

    assert_eq!(
        result,
        Err(CoreError::StaleWeek {
            goal_id: 2,
            goal_week: WeekId::containing(date!(2024 - 01 - 03)),
            current_week: WeekId::containing(TEST_TODAY),
        })
    );
}

#[test]
fn test_rollover_command_archives_stale_goal() {
    let goal: Goal = create_test_goal(2, 3, "-C-C-C-", date!(2024 - 01 - 03));
    let transition: Transition = apply(&goal, GoalCommand::Rollover, TEST_TODAY).unwrap();

    let record = transition.record.unwrap();
    assert_eq!(record.completed(), 3);
    assert_eq!(record.week_start(), date!(2023 - 12 - 31));
    assert!(transition.goal.day_states().is_untouched());
    assert_eq!(transition.goal.week_id(), WeekId::containing(TEST_TODAY));
    assert!(transition.effects.is_empty());
}

#[test]
fn test_rollover_command_on_current_goal_is_noop() {
    let goal: Goal = create_test_goal(2, 3, "-C-----", TEST_TODAY);
    let transition: Transition = apply(&goal, GoalCommand::Rollover, TEST_TODAY).unwrap();

    assert!(transition.record.is_none());
    assert_eq!(transition.goal, goal);
}
