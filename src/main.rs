use clap::{Arg, Command};
use log::info;

use daily_planner::auth::run_session;
use daily_planner::config::{ConfigOverrides, PlannerConfig};
use daily_planner::utils::io::Console;
use daily_planner::utils::logging::initialize_logging;
use daily_planner::{Gateway, DATABASE_ENV_VAR};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Define the command-line interface using clap
    let matches = Command::new("daily-planner")
        .about("A console daily planner backed by an SQL database")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a JSON configuration file")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("database")
                .long("database")
                .short('d')
                .help(format!(
                    "Database connection string (overrides {})",
                    DATABASE_ENV_VAR
                ))
                .value_name("URL"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("File that receives the application log")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Log level: off, error, warn, info, debug or trace")
                .value_name("LEVEL"),
        )
        .get_matches();

    let config = PlannerConfig::load(ConfigOverrides {
        config_file: matches.get_one::<String>("config").cloned(),
        database_url: matches.get_one::<String>("database").cloned(),
        log_file: matches.get_one::<String>("log-file").cloned(),
        log_level: matches.get_one::<String>("log-level").cloned(),
    })?;

    initialize_logging(&config.log_file, config.level_filter()?)?;
    info!(
        "Starting daily-planner against {}",
        config.redacted_database_url()
    );

    let gateway = Gateway::open(config.database_url.as_str())?;

    let mut console = Console::stdio();
    run_session(&mut console, &gateway)?;

    info!("daily-planner finished");
    Ok(())
}
