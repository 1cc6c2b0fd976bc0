// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Occurrence matching for recurrence rules.
//!
//! ## Invariants
//!
//! - Every-other parity is a property of the calendar: a week is "on" when
//!   it lies an even number of weeks from the week of `REFERENCE_MONDAY`,
//!   regardless of when the rule was created.
//! - A next occurrence is always strictly after the reference date. A
//!   same-day match is pushed out a full week.

use crate::calendar::{REFERENCE_MONDAY, add_days, weeks_between};
use crate::recurrence::{Parity, RecurrenceRule};
use crate::weekday::{Weekday, WeekdaySet};
use time::Date;

/// Upper bound on candidates checked when searching for a parity match.
/// Two full weeks always contain an "on" week.
const PARITY_SEARCH_LIMIT: usize = 14;

impl RecurrenceRule {
    /// Returns whether the rule fires on `date`.
    #[must_use]
    pub fn occurs_on(&self, date: Date) -> bool {
        match *self {
            Self::OnDate(on) => on == date,
            Self::Weekly { days, parity } => {
                days.contains(Weekday::of(date)) && parity_matches(parity, date)
            }
        }
    }

    /// Returns the first date strictly after `from` on which the rule fires.
    ///
    /// Unlike [`next_occurrence`], this honours every-other parity, so the
    /// returned date always satisfies [`RecurrenceRule::occurs_on`]. A
    /// one-off rule whose date is not after `from` has no next occurrence.
    #[must_use]
    pub fn next_after(&self, from: Date) -> Option<Date> {
        match *self {
            Self::OnDate(on) => (on > from).then_some(on),
            Self::Weekly {
                days,
                parity: Parity::Every,
            } => Some(next_occurrence(days, from)),
            Self::Weekly {
                days,
                parity: Parity::EveryOther,
            } => std::iter::successors(Some(next_occurrence(days, from)), |candidate| {
                Some(next_occurrence(days, *candidate))
            })
            .take(PARITY_SEARCH_LIMIT)
            .find(|candidate| self.occurs_on(*candidate)),
        }
    }

    /// Lists every date in `start..=end` on which the rule fires, ascending.
    ///
    /// Returns an empty list when `start` is after `end`.
    #[must_use]
    pub fn occurrences_between(&self, start: Date, end: Date) -> Vec<Date> {
        if let Self::OnDate(on) = *self {
            return if (start..=end).contains(&on) {
                vec![on]
            } else {
                Vec::new()
            };
        }

        std::iter::successors(Some(start), |date| date.next_day())
            .take_while(|date| *date <= end)
            .filter(|date| self.occurs_on(*date))
            .collect()
    }
}

/// Returns the nearest date after `from` that falls on one of `days`.
///
/// Parity is not considered. The result is never `from` itself: when
/// `from` already falls on one of `days`, that weekday counts as seven days
/// away.
#[must_use]
pub fn next_occurrence(days: WeekdaySet, from: Date) -> Date {
    let from_index: u8 = Weekday::of(from).index();
    let diff: u8 = days
        .iter()
        .map(|day| match (day.index() + 7 - from_index) % 7 {
            0 => 7,
            diff => diff,
        })
        .min()
        .unwrap_or(7);
    add_days(from, i64::from(diff))
}

fn parity_matches(parity: Parity, date: Date) -> bool {
    match parity {
        Parity::Every => true,
        Parity::EveryOther => weeks_between(REFERENCE_MONDAY, date).rem_euclid(2) == 0,
    }
}
