// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;
use time::Date;

/// Errors that can occur while building or decoding domain values.
///
/// None of these are fatal. Callers treat a failed decode as "needs reset"
/// and a failed schedule parse as "no schedule".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A weekly schedule was built from an empty weekday selection.
    #[error("A weekly schedule must name at least one weekday")]
    EmptyWeekdaySet,
    /// Goal frequency is below one completion per week.
    #[error("Invalid goal frequency: {frequency}. Must be at least 1")]
    InvalidFrequency {
        /// The rejected frequency.
        frequency: u32,
    },
    /// Stored day-state string does not have exactly seven characters.
    #[error("Day state string must be exactly 7 characters, got {length}")]
    InvalidDayStateLength {
        /// The number of characters found.
        length: usize,
    },
    /// Stored day-state string contains a character outside `-`, `C`, `M`.
    #[error("Invalid day state character '{character}' at position {position}")]
    InvalidDayStateChar {
        /// The offending character.
        character: char,
        /// Zero-based position within the string.
        position: usize,
    },
    /// A week identifier must start on a Sunday.
    #[error("Week must start on a Sunday, but {date} is a {weekday}")]
    InvalidWeekStart {
        /// The rejected start date.
        date: Date,
        /// The actual weekday of that date.
        weekday: time::Weekday,
    },
    /// Failed to parse date from string.
    #[error("Failed to parse date '{date_string}': {error}")]
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Text is not the name of a weekday.
    #[error("Unknown weekday name: '{0}'")]
    InvalidWeekdayName(String),
    /// Text is neither an ISO date nor a weekly description.
    #[error("Malformed recurrence: '{0}'")]
    MalformedRecurrence(String),
    /// An archived week does not span exactly seven days.
    #[error("Weekly record must end 6 days after it starts, got {start} to {end}")]
    InvalidRecordSpan {
        /// The stored week start.
        start: Date,
        /// The stored week end.
        end: Date,
    },
}
