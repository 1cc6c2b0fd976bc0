// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A goal store backed by a JSON file.
//!
//! The whole file is read up front and only written back by [`GoalFile::flush`].
//! Goals keep the order they had in the file.

use cadence::{ArchivedWeek, CoreError, GoalStore};
use cadence_domain::{Goal, WeeklyRecord};
use color_eyre::eyre::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalFile {
    path: PathBuf,
    goals: Vec<Goal>,
    archived: Vec<ArchivedWeek>,
}

impl GoalFile {
    /// Reads a goal file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON array of
    /// goals.
    pub fn open(path: &Path) -> Result<Self> {
        let raw: String = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read goal file {}", path.display()))?;
        let goals: Vec<Goal> = parse_goals(&raw)
            .wrap_err_with(|| format!("failed to decode goal file {}", path.display()))?;
        debug!(path = %path.display(), goals = goals.len(), "Loaded goal file");

        Ok(Self {
            path: path.to_path_buf(),
            goals,
            archived: Vec::new(),
        })
    }

    /// Writes the current goals back to the file they were read from.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    pub fn flush(&self) -> Result<()> {
        let json: String = render_json(&self.goals)?;
        std::fs::write(&self.path, json)
            .wrap_err_with(|| format!("failed to write goal file {}", self.path.display()))
    }

    /// Returns the records appended since the file was opened.
    #[must_use]
    pub fn archived(&self) -> &[ArchivedWeek] {
        &self.archived
    }
}

impl GoalStore for GoalFile {
    fn load_goals(&self) -> Result<Vec<Goal>, CoreError> {
        Ok(self.goals.clone())
    }

    fn load_goal(&self, goal_id: i64) -> Result<Option<Goal>, CoreError> {
        Ok(self.goals.iter().find(|goal| goal.id() == goal_id).cloned())
    }

    fn save_goal(&mut self, goal: &Goal) -> Result<(), CoreError> {
        match self.goals.iter_mut().find(|stored| stored.id() == goal.id()) {
            Some(stored) => *stored = goal.clone(),
            None => self.goals.push(goal.clone()),
        }
        Ok(())
    }

    fn append_record(&mut self, goal_id: i64, record: &WeeklyRecord) -> Result<(), CoreError> {
        self.archived.push(ArchivedWeek {
            goal_id,
            record: record.clone(),
        });
        Ok(())
    }
}

/// Decodes a JSON array of goals.
///
/// # Errors
///
/// Returns an error if the text is not valid goal JSON.
pub fn parse_goals(raw: &str) -> Result<Vec<Goal>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Pretty-prints a value as JSON with a trailing newline.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json: String =
        serde_json::to_string_pretty(value).wrap_err("failed to encode JSON")?;
    json.push('\n');
    Ok(json)
}
