pub mod settings;

pub use settings::{ConfigError, ConfigOverrides, PlannerConfig};
