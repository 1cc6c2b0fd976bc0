// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cadence_domain::{ParsedRecurrence, RecurrenceRule};
use time::Date;
use tracing::warn;

/// Parses a stored schedule string, logging data-quality problems.
///
/// Malformed schedules are never an error: they come back as `None` and the
/// caller treats the event as unscheduled.
#[must_use]
pub fn parse_schedule(raw: &str) -> Option<RecurrenceRule> {
    let parsed: ParsedRecurrence = RecurrenceRule::parse_lenient(raw);

    if !parsed.rejected.is_empty() {
        warn!(
            schedule = raw,
            rejected = ?parsed.rejected,
            "Dropped unrecognised day names from schedule"
        );
    }
    if parsed.rule.is_none() && !raw.trim().is_empty() {
        warn!(schedule = raw, "Malformed schedule treated as absent");
    }

    parsed.rule
}

/// Re-derives a stored schedule string with a fresh next-occurrence suffix.
///
/// Returns `None` when the stored text has no usable schedule.
#[must_use]
pub fn refresh_schedule(raw: &str, today: Date) -> Option<String> {
    parse_schedule(raw).map(|rule| rule.describe(today))
}
