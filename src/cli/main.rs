//! Command-line interface entry point for `CreditManager`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use credit_manager::config::Config;
use credit_manager::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use credit_manager::{info, warn};

fn main() {
    let args = Cli::parse();

    // `stored` is what the config subcommand edits and saves; overrides only touch this run
    let mut stored = Config::load();
    let defaults = Config::from_defaults();
    let mut config = stored.clone();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path = config.log_file_path();

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            warn!("Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        None | Some(Command::Run) => commands::session::run(&config),
        Some(Command::Config { subcommand }) => {
            commands::config::run(subcommand, &mut stored, &defaults);
        }
    }
}
