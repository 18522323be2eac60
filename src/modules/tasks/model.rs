use chrono::NaiveDateTime;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use crate::modules::utils::time::format_due_date;

/// Structure representing a single task owned by one user
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    pub task_id: i64,
    pub user_id: i64, // Owner
    pub title: String,
    pub description: String,
    pub due_date: NaiveDateTime,
    pub is_completed: bool,
}

impl Task {
    /// Map a `tasks` row in `task_id, user_id, title, description, due_date, is_completed` order
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            task_id: row.get(0)?,
            user_id: row.get(1)?,
            title: row.get(2)?,
            description: row.get(3)?,
            due_date: row.get(4)?,
            is_completed: row.get(5)?,
        })
    }

    /// One-line listing used by the task menu
    pub fn summary_line(&self) -> String {
        format!(
            "ID: {}, Title: {}, Description: {}, Due: {}, Completed: {}",
            self.task_id,
            self.title,
            self.description,
            format_due_date(&self.due_date),
            self.is_completed
        )
    }
}
