use chrono::NaiveDateTime;
use log::debug;
use rusqlite::params;

use super::model::Task;
use crate::modules::database::statements::{DELETE_TASK, INSERT_TASK, SELECT_USER_TASKS};
use crate::modules::database::{Gateway, StoreError};

impl Gateway {
    /// Insert a new, not yet completed task for `owner_id`
    pub fn add_task(
        &self,
        owner_id: i64,
        title: &str,
        description: &str,
        due_date: NaiveDateTime,
    ) -> Result<(), StoreError> {
        let connection = self.connect()?;
        connection.execute(
            INSERT_TASK,
            params![owner_id, title, description, due_date, false],
        )?;
        Ok(())
    }

    /// Delete a task if, and only if, `owner_id` owns it.
    ///
    /// Deleting a task that doesn't exist or belongs to someone else is a no-op.
    pub fn delete_task(&self, owner_id: i64, task_id: i64) -> Result<(), StoreError> {
        let connection = self.connect()?;
        let affected = connection.execute(DELETE_TASK, params![owner_id, task_id])?;
        debug!("Delete of task {} removed {} row(s)", task_id, affected);
        Ok(())
    }

    /// All tasks owned by `owner_id`, in whatever order the store returns them
    pub fn list_tasks(&self, owner_id: i64) -> Result<Vec<Task>, StoreError> {
        let connection = self.connect()?;
        let mut statement = connection.prepare(SELECT_USER_TASKS)?;
        let tasks = statement
            .query_map(params![owner_id], Task::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tasks)
    }
}
