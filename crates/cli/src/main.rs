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
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod goal_file;

use cadence::{
    ArchivedWeek, Clock, FixedClock, InMemoryCompletionLog, Session, SystemClock, parse_schedule,
};
use cadence_domain::{RecurrenceRule, parse_iso_date};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::eyre::{Context, Result, ensure, eyre};
use goal_file::{GoalFile, render_json};
use std::path::{Path, PathBuf};
use time::Date;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.log_level().into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    args.run()
}

/// Cadence - inspect recurrence rules and roll weekly goal progress
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// IANA timezone used to decide "today" when no date is given
    #[arg(long, global = true, env = "CADENCE_TZ", default_value = "UTC")]
    timezone: String,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run(&self.timezone)
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Print the canonical form of a rule with its next occurrence
    #[command(visible_alias = "d")]
    Describe {
        /// Recurrence rule, e.g. "Every other Monday and Friday"
        rule: String,

        /// Reference date (defaults to today)
        #[arg(long, value_parser = parse_iso_date)]
        from: Option<Date>,
    },

    /// Print whether a rule fires on a date
    #[command(visible_alias = "o")]
    Occurs {
        /// Recurrence rule
        rule: String,

        /// Date to check (YYYY-MM-DD)
        #[arg(value_parser = parse_iso_date)]
        date: Date,
    },

    /// Print the first date after the reference date on which a rule fires
    #[command(visible_alias = "n")]
    Next {
        /// Recurrence rule
        rule: String,

        /// Reference date (defaults to today)
        #[arg(long, value_parser = parse_iso_date)]
        from: Option<Date>,
    },

    /// Print every date in an inclusive range on which a rule fires
    #[command(visible_alias = "l")]
    List {
        /// Recurrence rule
        rule: String,

        /// First date of the range
        #[arg(value_parser = parse_iso_date)]
        start: Date,

        /// Last date of the range
        #[arg(value_parser = parse_iso_date)]
        end: Date,
    },

    /// Roll every goal in a goal file into the current week
    #[command(visible_alias = "r")]
    Rollover {
        /// JSON file holding an array of goals; rewritten in place
        goals: PathBuf,

        /// Date to roll into (defaults to today)
        #[arg(long, value_parser = parse_iso_date)]
        today: Option<Date>,

        /// Write the archived weeks to this JSON file
        #[arg(long)]
        records: Option<PathBuf>,
    },
}

impl Command {
    fn run(self, timezone: &str) -> Result<()> {
        match self {
            Self::Describe { rule, from } => {
                let from: Date = resolve_date(from, timezone)?;
                println!("{}", parse_rule(&rule)?.describe(from));
            }
            Self::Occurs { rule, date } => {
                println!("{}", parse_rule(&rule)?.occurs_on(date));
            }
            Self::Next { rule, from } => {
                let from: Date = resolve_date(from, timezone)?;
                match parse_rule(&rule)?.next_after(from) {
                    Some(next) => println!("{next}"),
                    None => println!("none"),
                }
            }
            Self::List { rule, start, end } => {
                ensure!(start <= end, "range start {start} is after range end {end}");
                for date in parse_rule(&rule)?.occurrences_between(start, end) {
                    println!("{date}");
                }
            }
            Self::Rollover {
                goals,
                today,
                records,
            } => rollover(&goals, resolve_date(today, timezone)?, records.as_deref())?,
        }
        Ok(())
    }
}

fn parse_rule(raw: &str) -> Result<RecurrenceRule> {
    parse_schedule(raw).ok_or_else(|| eyre!("unrecognised recurrence rule: {raw:?}"))
}

/// Returns `date`, or today's date in `timezone` when none was given.
fn resolve_date(date: Option<Date>, timezone: &str) -> Result<Date> {
    match date {
        Some(date) => Ok(date),
        None => {
            let clock: SystemClock = SystemClock::new(timezone)?;
            Ok(clock.today()?)
        }
    }
}

fn rollover(path: &Path, today: Date, records: Option<&Path>) -> Result<()> {
    let file: GoalFile = GoalFile::open(path)?;
    let (session, _): (
        Session<GoalFile, InMemoryCompletionLog, FixedClock>,
        Vec<ArchivedWeek>,
    ) = Session::start(file, InMemoryCompletionLog::new(), FixedClock::new(today))
        .wrap_err("rollover failed")?;

    let store: &GoalFile = session.store();
    store.flush()?;
    info!(
        week = %session.week(),
        archived = store.archived().len(),
        "Rolled goal file"
    );

    for entry in store.archived() {
        println!(
            "{}\t{}\t{}\t{}/{}",
            entry.goal_id,
            entry.record.header(),
            entry.record.week_start(),
            entry.record.completed(),
            entry.record.frequency(),
        );
    }

    if let Some(records) = records {
        std::fs::write(records, render_json(store.archived())?)
            .wrap_err_with(|| format!("failed to write records to {}", records.display()))?;
    }
    Ok(())
}
