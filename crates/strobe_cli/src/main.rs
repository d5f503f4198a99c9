//! Strobe CLI — the command-line interface for the Strobe logic simulator.
//!
//! Provides `strobe sim` for simulating a single document against its test
//! vectors, `strobe test` for batch-simulating every document in the
//! sources directory, `strobe list` for enumerating candidate modules, and
//! `strobe report` for printing the cumulative report.

#![warn(missing_docs)]

mod list;
mod pipeline;
mod report;
mod sim;

use std::process;

use clap::{Parser, Subcommand};

/// Strobe — a single-assignment combinational logic simulator.
#[derive(Parser, Debug)]
#[command(name = "strobe", version, about = "Strobe logic simulator")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `strobe.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Simulate a single document against its test vectors.
    Sim(SimArgs),
    /// Simulate every document in the sources directory.
    Test(TestArgs),
    /// List candidate modules in the sources directory.
    List,
    /// Print the cumulative report.
    Report,
}

/// Arguments for the `strobe sim` subcommand.
#[derive(Parser, Debug)]
pub struct SimArgs {
    /// Document file path, or a module stem resolved in the sources
    /// directory.
    pub file: String,

    /// Override the test-vector file path (default:
    /// `<tests>/<stem>_tests.json`).
    #[arg(long)]
    pub tests: Option<String>,

    /// Override the report file path (default:
    /// `<reports>/<report_file>` from the configuration).
    #[arg(long)]
    pub report: Option<String>,
}

/// Arguments for the `strobe test` subcommand.
#[derive(Parser, Debug)]
pub struct TestArgs {
    /// Substring filter for module stems.
    #[arg(long)]
    pub filter: Option<String>,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Sim(ref args) => sim::run(args, &global),
        Command::Test(ref args) => test::run(args, &global),
        Command::List => list::run(&global),
        Command::Report => report::run(&global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
