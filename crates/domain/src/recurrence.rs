// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Recurrence rules and their persisted string form.
//!
//! The string grammar is:
//!
//! ```text
//! rule       := iso-date | weekly
//! iso-date   := YYYY "-" MM "-" DD
//! weekly     := ("Every " | "Every other ") day-list [" (Next: " iso-date ")"]
//! day-list   := day | day " and " day | day ("," day)+ ", and " day
//! day        := "Sunday".."Saturday"
//! ```
//!
//! `parse` and `format` are the only places that touch this grammar.
//! Everything else works with `RecurrenceRule` values.

use crate::calendar::parse_iso_date;
use crate::error::DomainError;
use crate::weekday::{Weekday, WeekdaySet};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

const EVERY_OTHER_PREFIX: &str = "Every other ";
const EVERY_PREFIX: &str = "Every ";
const NEXT_SUFFIX: &str = " (Next: ";

/// Whether a weekly rule fires every week or every second week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parity {
    /// Fires in every week.
    Every,
    /// Fires in alternate weeks, counted from a fixed calendar anchor.
    EveryOther,
}

impl Parity {
    const fn prefix(self) -> &'static str {
        match self {
            Self::Every => EVERY_PREFIX,
            Self::EveryOther => EVERY_OTHER_PREFIX,
        }
    }
}

/// A schedule for an event or goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RecurrenceRule {
    /// A single explicit occurrence.
    OnDate(Date),
    /// Repeats on the given weekdays.
    Weekly {
        /// The weekdays the rule fires on (never empty).
        days: WeekdaySet,
        /// Every week or every other week.
        parity: Parity,
    },
}

/// The outcome of a lenient parse, keeping track of what was thrown away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecurrence {
    /// The parsed rule, or `None` if nothing usable was found.
    pub rule: Option<RecurrenceRule>,
    /// Day names that did not resolve to a weekday and were dropped.
    pub rejected: Vec<String>,
}

impl RecurrenceRule {
    /// Builds a weekly rule.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyWeekdaySet` if `days` is empty.
    pub fn weekly<I>(days: I, parity: Parity) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = Weekday>,
    {
        Ok(Self::Weekly {
            days: WeekdaySet::new(days)?,
            parity,
        })
    }

    /// Parses a persisted recurrence string.
    ///
    /// Returns `None` for empty text and for text that yields no usable
    /// schedule. Unknown day names are dropped silently; use
    /// [`RecurrenceRule::parse_lenient`] to see what was dropped.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::parse_lenient(raw).rule
    }

    /// Parses a persisted recurrence string, reporting dropped day names.
    ///
    /// Any `" (Next: ...)"` suffix is ignored; it is a cache, not a source
    /// of truth.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> ParsedRecurrence {
        let raw: &str = raw.trim();
        if raw.is_empty() {
            return ParsedRecurrence {
                rule: None,
                rejected: Vec::new(),
            };
        }

        if !raw.starts_with("Every") {
            let date: &str = raw.split(NEXT_SUFFIX).next().unwrap_or_default();
            return ParsedRecurrence {
                rule: parse_iso_date(date).ok().map(Self::OnDate),
                rejected: Vec::new(),
            };
        }

        let (parity, rest): (Parity, &str) =
            if let Some(rest) = raw.strip_prefix(EVERY_OTHER_PREFIX) {
                (Parity::EveryOther, rest)
            } else if let Some(rest) = raw.strip_prefix(EVERY_PREFIX) {
                (Parity::Every, rest)
            } else {
                return ParsedRecurrence {
                    rule: None,
                    rejected: vec![raw.to_string()],
                };
            };

        let day_list: &str = rest.split(NEXT_SUFFIX).next().unwrap_or_default();

        let mut days: Vec<Weekday> = Vec::new();
        let mut rejected: Vec<String> = Vec::new();
        for name in split_day_list(day_list) {
            match Weekday::from_name(name) {
                Some(day) => days.push(day),
                None => rejected.push(name.to_string()),
            }
        }

        ParsedRecurrence {
            rule: Self::weekly(days, parity).ok(),
            rejected,
        }
    }

    /// Formats the rule as its persisted string.
    ///
    /// When `next` is given, weekly rules get a `" (Next: yyyy-MM-dd)"`
    /// suffix. A one-off date is its own next occurrence and never carries one.
    #[must_use]
    pub fn format(&self, next: Option<Date>) -> String {
        match (self, next) {
            (Self::OnDate(date), _) => date.to_string(),
            (Self::Weekly { days, parity }, None) => {
                format!("{}{}", parity.prefix(), join_day_names(*days))
            }
            (Self::Weekly { days, parity }, Some(next)) => format!(
                "{}{}{NEXT_SUFFIX}{next})",
                parity.prefix(),
                join_day_names(*days)
            ),
        }
    }

    /// Formats the rule with its next occurrence after `from`.
    ///
    /// This is the string callers cache in their schedule column.
    #[must_use]
    pub fn describe(&self, from: Date) -> String {
        self.format(self.next_after(from))
    }

    /// Returns the weekdays of a weekly rule.
    #[must_use]
    pub const fn days(&self) -> Option<WeekdaySet> {
        match self {
            Self::OnDate(_) => None,
            Self::Weekly { days, .. } => Some(*days),
        }
    }
}

/// Splits `"A"`, `"A and B"` and `"A, B, and C"` into trimmed names.
fn split_day_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(", ")
        .flat_map(|part| part.split(" and "))
        .map(str::trim)
        .map(|name| name.strip_prefix("and ").unwrap_or(name).trim())
        .filter(|name| !name.is_empty())
}

fn join_day_names(days: WeekdaySet) -> String {
    let names: Vec<&str> = days.iter().map(Weekday::name).collect();
    match names.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

impl std::fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(None))
    }
}

impl FromStr for RecurrenceRule {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::MalformedRecurrence(s.to_string()))
    }
}

impl TryFrom<String> for RecurrenceRule {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RecurrenceRule> for String {
    fn from(rule: RecurrenceRule) -> Self {
        rule.format(None)
    }
}
