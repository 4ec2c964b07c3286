// ABOUTME: Main entry point for numdesk with menu and CLI support
//
// Binary: numdesk
// Usage: numdesk [COMMAND]
// - No command: launches the interactive menu
// - seed: generate numbers for a segment prefix
// - stats: print pool and subscriber counts
// - list: dump pool entries

#![allow(missing_docs)]

use anyhow::Result;
use clap::Parser;
use numdesk::app::App;
use numdesk::cli::{self, Cli, Commands};
use numdesk::{config, ui};
use std::path::Path;

fn main() -> Result<()> {
    let args = Cli::parse();
    let data_dir = args
        .data_dir
        .clone()
        .unwrap_or_else(config::default_data_dir);

    setup_logging(&data_dir);
    setup_panic_handler();

    match args.command {
        Some(Commands::Seed { prefix, count }) => cli::seed::execute(data_dir, &prefix, count),
        Some(Commands::Stats) => cli::stats::execute(data_dir),
        Some(Commands::List { state }) => cli::list::execute(data_dir, state.as_deref()),
        None => {
            let mut app = App::init(data_dir)?;
            let result = ui::run(&mut app);
            // Menu screens toggle raw mode per keypress; make sure a failed
            // screen does not leave the terminal raw
            if result.is_err() {
                let _ = crossterm::terminal::disable_raw_mode();
            }
            result
        }
    }
}

fn setup_logging(data_dir: &Path) {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    let log_dir = data_dir.join("logs");
    let _ = std::fs::create_dir_all(&log_dir);

    let log_file = log_dir.join(format!(
        "numdesk-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    // Logging is best effort; the tool still works without a log file
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "numdesk=info".into()),
        )
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        // Restore the terminal before reporting, read_key may have it raw
        let _ = crossterm::terminal::disable_raw_mode();

        tracing::error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
