// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DayStates, Goal, Parity, RecurrenceRule, WeekId, Weekday};
use time::Date;

/// Every constructible weekday set, as the 127 non-empty subsets of the week.
pub fn all_weekday_subsets() -> Vec<Vec<Weekday>> {
    (1_u8..128)
        .map(|mask| {
            Weekday::ALL
                .into_iter()
                .filter(|day| mask & (1 << day.index()) != 0)
                .collect()
        })
        .collect()
}

pub fn weekly(days: &[Weekday], parity: Parity) -> RecurrenceRule {
    RecurrenceRule::weekly(days.iter().copied(), parity).unwrap()
}

pub fn create_test_goal(frequency: u32, day_states: &str, week_id: WeekId) -> Goal {
    let states: DayStates = day_states.parse().unwrap();
    Goal::restore(
        42,
        String::from("Practice piano"),
        frequency,
        states,
        None,
        week_id,
    )
    .unwrap()
}

pub fn week_starting(start: Date) -> WeekId {
    WeekId::from_start(start).unwrap()
}
