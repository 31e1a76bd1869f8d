//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spendlog")]
#[command(about = "Daily spending report from a plain-text outline log", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Expenditure log to read (overrides SPENDLOG_FILE and the config file)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Config file (default: ./spendlog.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Daily budget (default: 100 per week)
    #[arg(short, long, global = true)]
    pub budget: Option<f64>,

    /// What to do with day headings lacking a date (discard, keep-previous)
    #[arg(long, global = true, value_name = "POLICY")]
    pub undated: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the total spent per day, then overall spend and budget
    Summary,

    /// Print each day of the log in order
    Days {
        /// Show the item breakdown of every day
        #[arg(short, long)]
        items: bool,
    },

    /// Render daily and cumulative spending as an SVG chart
    Plot {
        /// Output file
        #[arg(short, long, default_value = "spending.svg")]
        output: PathBuf,
    },

    /// Write a default spendlog.toml
    InitConfig {
        /// Directory to write into (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}
