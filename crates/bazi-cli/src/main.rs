//! Command-line frontend for Bazi charts and readings.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bazi",
    about = "Bazi charts, verification questions, and five-year fortune readings",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and display the four-pillar chart
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Birth time (HH or HH:MM, 24-hour)
        #[arg(short, long)]
        time: String,

        /// Print JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Show the verification questions for a chart
    Questions {
        /// Birth date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Birth time (HH or HH:MM, 24-hour)
        #[arg(short, long)]
        time: String,

        /// Context date for the question set (default: today)
        #[arg(long)]
        on: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Answer the questions interactively and get the fortune report
    Reading {
        /// Birth date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Birth time (HH or HH:MM, 24-hour)
        #[arg(short, long)]
        time: String,

        /// Context date for questions and the first timeline year (default: today)
        #[arg(long)]
        on: Option<String>,

        /// Years in the fortune timeline
        #[arg(short, long, default_value = "5")]
        years: u32,

        /// Print JSON instead of tables
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Chart { date, time, json } => commands::chart::run(&date, &time, json),
        Commands::Questions {
            date,
            time,
            on,
            json,
        } => commands::questions::run(&date, &time, on.as_deref(), json),
        Commands::Reading {
            date,
            time,
            on,
            years,
            json,
        } => commands::reading::run(&date, &time, on.as_deref(), years, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
