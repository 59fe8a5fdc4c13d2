use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use arbor_cli::{Args, to_reportable};

fn init_logger(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .init();
}

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logger(&args.log_level);

    info!(log_level = args.log_level.as_str(); "Starting Arbor");
    debug!(args:?; "Parsed arguments");

    let Err(err) = arbor_cli::run(&args) else {
        info!("Completed successfully");
        return;
    };

    let mut report = String::new();
    miette::GraphicalReportHandler::new()
        .render_report(&mut report, &to_reportable(&err))
        .expect("Writing to String buffer is infallible");

    error!("Failed\n{report}");
    process::exit(1);
}
