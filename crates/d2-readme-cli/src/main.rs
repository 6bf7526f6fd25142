//! d2-readme CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use d2_readme_cli::{Args, error_adapter::render_report};

fn main() -> ExitCode {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logger(&args);
    debug!(args:?; "Parsed arguments");

    match d2_readme_cli::run(&args) {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Failed\n{}", render_report(&err));
            ExitCode::FAILURE
        }
    }
}

/// Sets up `env_logger` from `RUST_LOG`, with `--log-level` as the global filter.
fn init_logger(args: &Args) {
    let level = args.log_filter().unwrap_or_else(|| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", args.log_level);
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(level)
        .init();

    info!(level:?; "Starting d2-readme");
}
