use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ghcn-monthly")]
#[command(about = "Monthly climate summaries from a GHCN-Daily station CSV export")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean and aggregate the export, then print the monthly summary table
    Report {
        #[arg(short, long, help = "Input station CSV file")]
        file: PathBuf,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Temperature frequency distributions for one calendar year
    Histogram {
        #[arg(short, long, help = "Input station CSV file")]
        file: PathBuf,

        #[arg(short, long, help = "Calendar year to restrict the daily rows to")]
        year: i32,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Dataset statistics: stations, record counts, date range
    Info {
        #[arg(short, long, help = "Input station CSV file")]
        file: PathBuf,
    },

    /// Load and check the export without producing a report
    Validate {
        #[arg(short, long, help = "Input station CSV file")]
        file: PathBuf,
    },
}
