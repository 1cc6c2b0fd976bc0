// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod clock;
mod command;
mod error;
mod schedule;
mod session;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{Effect, Transition, apply};
pub use clock::{Clock, FixedClock, SystemClock};
pub use command::GoalCommand;
pub use error::CoreError;
pub use schedule::{parse_schedule, refresh_schedule};
pub use session::{Session, SessionStart, begin_session};
pub use store::{ArchivedWeek, CompletionLog, GoalStore, InMemoryCompletionLog, InMemoryGoalStore};
