// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-weekday progress slots for a goal's live week.

use crate::error::DomainError;
use crate::weekday::Weekday;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Status of a single weekday within a goal's week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayState {
    /// Nothing recorded yet.
    #[default]
    Open,
    /// The goal was completed on this day.
    Complete,
    /// The day was explicitly marked as missed.
    Missed,
}

impl DayState {
    /// Returns the single-character storage symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Open => '-',
            Self::Complete => 'C',
            Self::Missed => 'M',
        }
    }

    /// Decodes a storage symbol.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '-' => Some(Self::Open),
            'C' => Some(Self::Complete),
            'M' => Some(Self::Missed),
            _ => None,
        }
    }
}

/// The seven day-state slots of a week, indexed by canonical weekday index.
///
/// Stored as a 7-character string over `-`, `C`, `M` in Sunday-first order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayStates {
    states: [DayState; 7],
}

impl DayStates {
    /// Creates day states from a full week of slots.
    #[must_use]
    pub const fn new(states: [DayState; 7]) -> Self {
        Self { states }
    }

    /// Returns the state of one weekday.
    #[must_use]
    pub const fn get(&self, day: Weekday) -> DayState {
        self.states[day.index() as usize]
    }

    /// Replaces the state of one weekday, returning the previous state.
    pub const fn set(&mut self, day: Weekday, state: DayState) -> DayState {
        let slot: &mut DayState = &mut self.states[day.index() as usize];
        let previous: DayState = *slot;
        *slot = state;
        previous
    }

    /// Counts the slots marked `Complete`.
    #[must_use]
    pub fn completed_count(&self) -> u32 {
        self.count(DayState::Complete)
    }

    /// Counts the slots marked `Missed`.
    #[must_use]
    pub fn missed_count(&self) -> u32 {
        self.count(DayState::Missed)
    }

    /// Returns whether every slot is `Open`.
    #[must_use]
    pub fn is_untouched(&self) -> bool {
        self.states.iter().all(|state| *state == DayState::Open)
    }

    /// Iterates `(weekday, state)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, DayState)> + '_ {
        Weekday::ALL.into_iter().zip(self.states.iter().copied())
    }

    /// Returns the raw slot array.
    #[must_use]
    pub const fn as_array(&self) -> &[DayState; 7] {
        &self.states
    }

    fn count(&self, wanted: DayState) -> u32 {
        self.states
            .iter()
            .fold(0, |count, state| count + u32::from(*state == wanted))
    }
}

impl FromStr for DayStates {
    type Err = DomainError;

    /// Decodes the 7-character storage form.
    ///
    /// Any character outside `-`, `C`, `M` is treated as corruption and
    /// fails the whole decode; nothing is guessed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length: usize = s.chars().count();
        if length != 7 {
            return Err(DomainError::InvalidDayStateLength { length });
        }

        let mut states: [DayState; 7] = [DayState::Open; 7];
        for (position, (slot, character)) in states.iter_mut().zip(s.chars()).enumerate() {
            *slot = DayState::from_symbol(character).ok_or(DomainError::InvalidDayStateChar {
                character,
                position,
            })?;
        }

        Ok(Self { states })
    }
}

impl std::fmt::Display for DayStates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.states
            .iter()
            .try_for_each(|state| write!(f, "{}", state.symbol()))
    }
}

impl TryFrom<String> for DayStates {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayStates> for String {
    fn from(states: DayStates) -> Self {
        states.to_string()
    }
}
