mod commands;
mod config;
mod input;
mod logging;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::book::{AddArgs, EditArgs, RemoveArgs};
use commands::charts::{PriorityArgs, PyramidArgs, RingOffsetArgs};
use commands::dashboard::CategorizeArgs;
use commands::LoanInputArgs;

/// Debt snowball loan statistics and chart geometry
#[derive(Parser)]
#[command(
    name = "debtdash",
    version,
    about = "Debt snowball loan statistics and chart geometry",
    long_about = "A CLI for tracking outstanding loans smallest-balance-first. \
                  Ranks loans for a debt snowball, totals them by size band, \
                  and derives donut, pyramid, and progress-ring chart geometry \
                  with decimal precision."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Dashboard configuration file (JSON, or YAML with a .yaml/.yml extension)
    #[arg(long, global = true)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the full dashboard: order, totals, chart geometry, snowball focus
    Dashboard(LoanInputArgs),
    /// List loans smallest balance first
    Sort(LoanInputArgs),
    /// Total outstanding and loan counts per size band
    Totals(LoanInputArgs),
    /// Loans with amounts, thousands and shares formatted as the dashboard shows them
    Display(LoanInputArgs),
    /// Donut chart segments (share, start offset, color)
    Segments(LoanInputArgs),
    /// Pyramid bar widths interpolated by amount
    Pyramid(PyramidArgs),
    /// Snowball focus: the smallest loans with progress-ring geometry
    Priority(PriorityArgs),
    /// Stroke-dash offset for a progress ring
    RingOffset(RingOffsetArgs),
    /// Label a loan name with its display category
    Categorize(CategorizeArgs),
    /// Add a loan and print the resulting collection
    Add(AddArgs),
    /// Edit a loan's name and amount and print the resulting collection
    Edit(EditArgs),
    /// Remove a loan and print the resulting collection
    Remove(RemoveArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging();

    let dashboard_config = match config::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    };
    let cfg = dashboard_config.as_ref();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Dashboard(args) => commands::dashboard::run_dashboard(args, cfg),
        Commands::Sort(args) => commands::stats::run_sort(args),
        Commands::Totals(args) => commands::stats::run_totals(args),
        Commands::Display(args) => commands::stats::run_display(args),
        Commands::Segments(args) => commands::charts::run_segments(args, cfg),
        Commands::Pyramid(args) => commands::charts::run_pyramid(args, cfg),
        Commands::Priority(args) => commands::charts::run_priority(args, cfg),
        Commands::RingOffset(args) => commands::charts::run_ring_offset(args),
        Commands::Categorize(args) => commands::dashboard::run_categorize(args),
        Commands::Add(args) => commands::book::run_add(args),
        Commands::Edit(args) => commands::book::run_edit(args),
        Commands::Remove(args) => commands::book::run_remove(args),
        Commands::Version => {
            println!("debtdash {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
