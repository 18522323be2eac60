// First, declare the modules folder itself
mod modules;

// Re-export everything from modules for easier access
pub use modules::{auth, config, database, tasks, utils};

// Re-export commonly used types
pub use modules::auth::store::User;
pub use modules::config::PlannerConfig;
pub use modules::database::{Gateway, StoreError};
pub use modules::tasks::model::Task;

// Constants
pub const DATABASE_ENV_VAR: &str = "DAILY_PLANNER_DATABASE";
pub const DEFAULT_DATABASE_URL: &str = "daily_planner.db";
pub const DEFAULT_LOG_FILE: &str = "daily_planner.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";
