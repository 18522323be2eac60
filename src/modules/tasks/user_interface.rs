// src/modules/tasks/user_interface.rs
use log::error;
use std::io::{self, BufRead, Write};

use crate::auth::store::User;
use crate::modules::database::Gateway;
use crate::modules::utils::io::Console;
use crate::modules::utils::logging::log_task_event;
use crate::modules::utils::time::parse_due_date;

/// Handle the 'add' command
pub fn handle_add_command<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    gateway: &Gateway,
    user: &User,
) -> io::Result<()> {
    let title = console.prompt("Enter task title:")?;
    let description = console.prompt("Enter task description:")?;
    let due_date = console.prompt_until(
        "Enter due date (YYYY-MM-DD, optionally followed by HH:MM):",
        "Invalid date format, please try again (YYYY-MM-DD):",
        parse_due_date,
    )?;

    match gateway.add_task(user.user_id, &title, &description, due_date) {
        Ok(()) => {
            log_task_event("add", user.user_id, None, None);
            console.say("Task added.")
        }
        Err(e) => {
            error!("Adding task failed: {}", e);
            log_task_event("add", user.user_id, None, Some(&e.to_string()));
            console.say(&format!("Could not add task: {}", e))
        }
    }
}

/// Handle the 'delete' command
pub fn handle_delete_command<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    gateway: &Gateway,
    user: &User,
) -> io::Result<()> {
    let task_id = console.prompt_until(
        "Enter the ID of the task to delete:",
        "Invalid ID format, please try again:",
        |input| input.trim().parse::<i64>().ok(),
    )?;

    match gateway.delete_task(user.user_id, task_id) {
        Ok(()) => {
            log_task_event("delete", user.user_id, Some(task_id), None);
            console.say("Task deleted.")
        }
        Err(e) => {
            error!("Deleting task {} failed: {}", task_id, e);
            log_task_event("delete", user.user_id, Some(task_id), Some(&e.to_string()));
            console.say(&format!("Could not delete task: {}", e))
        }
    }
}

/// Handle the 'list' command
pub fn handle_list_command<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    gateway: &Gateway,
    user: &User,
) -> io::Result<()> {
    match gateway.list_tasks(user.user_id) {
        Ok(tasks) if tasks.is_empty() => console.say("You have no tasks."),
        Ok(tasks) => {
            for task in &tasks {
                console.say(&task.summary_line())?;
            }
            Ok(())
        }
        Err(e) => {
            error!("Listing tasks failed: {}", e);
            log_task_event("list", user.user_id, None, Some(&e.to_string()));
            console.say(&format!("Could not load tasks: {}", e))
        }
    }
}
