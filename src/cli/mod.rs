// ABOUTME: Command-line interface - argument parsing and subcommand dispatch

pub mod list;
pub mod seed;
pub mod stats;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "numdesk")]
#[command(about = "Mobile hall subscriber and phone number desk")]
#[command(version)]
pub struct Cli {
    /// Directory holding the data files (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate numbers for a segment prefix and save the pool
    Seed {
        /// 3-7 digit segment prefix, e.g. 138 or 1380001
        prefix: String,

        /// How many numbers to generate
        #[arg(short, long, default_value_t = 50)]
        count: usize,
    },

    /// Print pool and subscriber statistics
    Stats,

    /// List numbers, optionally filtered to one state
    List {
        /// Only show numbers in this state (free, assigned, inactive)
        #[arg(short, long)]
        state: Option<String>,
    },
}
