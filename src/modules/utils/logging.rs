use env_logger::{Builder, WriteStyle};
use log::{error, info, warn, LevelFilter};
use std::fs::OpenOptions;

use super::time::current_timestamp;

/// Initialize the logging system, appending to the given log file
pub fn initialize_logging(
    log_file: &str,
    level: LevelFilter,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    Builder::new()
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        .write_style(WriteStyle::Never)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;

    info!("Logging system initialized");
    Ok(())
}

/// Mask all but the ends of a value before it reaches the log
fn format_sensitive(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}

/// How a registration or login attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountOutcome {
    Accepted,
    UsernameTaken,
    Rejected,
    StoreFailure,
}

impl AccountOutcome {
    fn as_str(&self) -> &'static str {
        match self {
            AccountOutcome::Accepted => "accepted",
            AccountOutcome::UsernameTaken => "username-taken",
            AccountOutcome::Rejected => "rejected",
            AccountOutcome::StoreFailure => "store-failure",
        }
    }
}

fn account_event_line(action: &str, username: &str, outcome: AccountOutcome) -> String {
    format!(
        "account {}: user={} outcome={} at={}",
        action,
        format_sensitive(username),
        outcome.as_str(),
        current_timestamp()
    )
}

fn task_event_line(
    action: &str,
    owner_id: i64,
    task_id: Option<i64>,
    failure: Option<&str>,
) -> String {
    let task = task_id.map_or_else(|| "-".to_string(), |id| id.to_string());
    let mut line = format!(
        "task {}: owner_id={} task_id={} at={}",
        action,
        owner_id,
        task,
        current_timestamp()
    );
    if let Some(reason) = failure {
        line.push_str(&format!(" failure={:?}", reason));
    }
    line
}

/// Record a registration or login attempt. Never pass passwords or digests here.
pub fn log_account_event(action: &str, username: &str, outcome: AccountOutcome) {
    let line = account_event_line(action, username, outcome);
    match outcome {
        AccountOutcome::Accepted => info!("{}", line),
        AccountOutcome::StoreFailure => error!("{}", line),
        AccountOutcome::UsernameTaken | AccountOutcome::Rejected => warn!("{}", line),
    }
}

/// Record an add, delete or list against one owner's tasks
pub fn log_task_event(action: &str, owner_id: i64, task_id: Option<i64>, failure: Option<&str>) {
    let line = task_event_line(action, owner_id, task_id, failure);
    if failure.is_some() {
        error!("{}", line);
    } else {
        info!("{}", line);
    }
}
