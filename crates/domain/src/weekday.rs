// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// A day of the week.
///
/// The canonical index runs Sunday (0) to Saturday (6) and is used to
/// address day-state slots. It does not depend on any locale's first day
/// of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All weekdays in canonical order.
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns the canonical index (0 = Sunday).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    /// Returns the weekday with the given canonical index.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Returns the full English name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Looks up a weekday by full English name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name: &str = name.trim();
        Self::ALL
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(name))
    }

    /// Returns the weekday a calendar date falls on.
    #[must_use]
    pub const fn of(date: Date) -> Self {
        Self::from_time(date.weekday())
    }

    const fn from_time(weekday: time::Weekday) -> Self {
        match weekday {
            time::Weekday::Sunday => Self::Sunday,
            time::Weekday::Monday => Self::Monday,
            time::Weekday::Tuesday => Self::Tuesday,
            time::Weekday::Wednesday => Self::Wednesday,
            time::Weekday::Thursday => Self::Thursday,
            time::Weekday::Friday => Self::Friday,
            time::Weekday::Saturday => Self::Saturday,
        }
    }
}

impl From<time::Weekday> for Weekday {
    fn from(weekday: time::Weekday) -> Self {
        Self::from_time(weekday)
    }
}

impl From<Weekday> for time::Weekday {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sunday => Self::Sunday,
            Weekday::Monday => Self::Monday,
            Weekday::Tuesday => Self::Tuesday,
            Weekday::Wednesday => Self::Wednesday,
            Weekday::Thursday => Self::Thursday,
            Weekday::Friday => Self::Friday,
            Weekday::Saturday => Self::Saturday,
        }
    }
}

impl FromStr for Weekday {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| DomainError::InvalidWeekdayName(s.to_string()))
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A non-empty set of weekdays.
///
/// Iteration always yields days in canonical Sunday-first order, regardless
/// of the order they were added in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Weekday>", into = "Vec<Weekday>")]
pub struct WeekdaySet {
    bits: u8,
}

impl WeekdaySet {
    /// Builds a set from any collection of weekdays. Duplicates collapse.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyWeekdaySet` if no weekday is given.
    pub fn new<I>(days: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = Weekday>,
    {
        let bits: u8 = days
            .into_iter()
            .fold(0, |bits, day| bits | Self::bit(day));
        if bits == 0 {
            return Err(DomainError::EmptyWeekdaySet);
        }
        Ok(Self { bits })
    }

    /// Builds a set holding exactly one weekday.
    #[must_use]
    pub const fn single(day: Weekday) -> Self {
        Self {
            bits: Self::bit(day),
        }
    }

    /// Returns whether `day` is in the set.
    #[must_use]
    pub const fn contains(self, day: Weekday) -> bool {
        self.bits & Self::bit(day) != 0
    }

    /// Returns the number of weekdays in the set (always at least one).
    #[must_use]
    pub const fn count(self) -> u32 {
        self.bits.count_ones()
    }

    /// Iterates the weekdays in canonical order.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        Weekday::ALL
            .into_iter()
            .filter(move |day| self.contains(*day))
    }

    const fn bit(day: Weekday) -> u8 {
        1 << day.index()
    }
}

impl TryFrom<Vec<Weekday>> for WeekdaySet {
    type Error = DomainError;

    fn try_from(days: Vec<Weekday>) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<WeekdaySet> for Vec<Weekday> {
    fn from(set: WeekdaySet) -> Self {
        set.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_index_round_trips() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::from_index(day.index()), Some(day));
        }
        assert_eq!(Weekday::from_index(7), None);
    }

    #[test]
    fn test_sunday_is_index_zero() {
        assert_eq!(Weekday::Sunday.index(), 0);
        assert_eq!(Weekday::Saturday.index(), 6);
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(Weekday::from_name("monday"), Some(Weekday::Monday));
        assert_eq!(Weekday::from_name("FRIDAY"), Some(Weekday::Friday));
        assert_eq!(Weekday::from_name(" Tuesday "), Some(Weekday::Tuesday));
    }

    #[test]
    fn test_from_name_rejects_abbreviations() {
        assert_eq!(Weekday::from_name("Mon"), None);
        assert!(matches!(
            "Thurs".parse::<Weekday>(),
            Err(DomainError::InvalidWeekdayName(_))
        ));
    }

    #[test]
    fn test_of_date() {
        assert_eq!(Weekday::of(date!(2024 - 01 - 07)), Weekday::Sunday);
        assert_eq!(Weekday::of(date!(2024 - 01 - 10)), Weekday::Wednesday);
    }

    #[test]
    fn test_time_weekday_conversion() {
        for day in Weekday::ALL {
            let converted: time::Weekday = day.into();
            assert_eq!(Weekday::from(converted), day);
            assert_eq!(converted.number_days_from_sunday(), day.index());
        }
    }

    #[test]
    fn test_set_rejects_empty() {
        assert_eq!(
            WeekdaySet::new(Vec::new()),
            Err(DomainError::EmptyWeekdaySet)
        );
    }

    #[test]
    fn test_set_iterates_in_canonical_order() {
        let set: WeekdaySet =
            WeekdaySet::new([Weekday::Friday, Weekday::Sunday, Weekday::Wednesday]).unwrap();
        let days: Vec<Weekday> = set.iter().collect();
        assert_eq!(
            days,
            vec![Weekday::Sunday, Weekday::Wednesday, Weekday::Friday]
        );
    }

    #[test]
    fn test_set_collapses_duplicates() {
        let set: WeekdaySet = WeekdaySet::new([Weekday::Monday, Weekday::Monday]).unwrap();
        assert_eq!(set.count(), 1);
        assert_eq!(set, WeekdaySet::single(Weekday::Monday));
    }

    #[test]
    fn test_set_deserialize_rejects_empty_list() {
        let result: Result<WeekdaySet, serde_json::Error> = serde_json::from_str("[]");
        assert!(result.is_err());
    }
}
