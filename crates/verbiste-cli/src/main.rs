//! Verbiste CLI entry point.
//!
//! Provides command-line tools for French verb conjugation:
//! - `verbiste conjugate` - Print the conjugation tables of a verb
//! - `verbiste search` - List verbs matching a prefix
//! - `verbiste auxiliary` - Show which auxiliary a verb takes

mod commands;
mod output;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_auxiliary, run_conjugate, run_search, AuxiliaryArgs, ConjugateArgs, DataArgs, SearchArgs,
};
use env_logger::{Builder, Env};
use log::debug;

/// French verb conjugation tools.
#[derive(Debug, Parser)]
#[command(name = "verbiste")]
#[command(about = "French verb conjugation tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub data: DataArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the conjugation tables of a verb
    Conjugate(ConjugateArgs),
    /// List verbs starting with a prefix
    Search(SearchArgs),
    /// Show which auxiliary a verb takes in compound tenses
    Auxiliary(AuxiliaryArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Initialize logging. `RUST_LOG` takes precedence over `--verbose`.
fn setup_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(default_filter)).init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    debug!("data directory: {}", cli.data.data_dir.display());
    let result = match cli.command {
        Commands::Conjugate(args) => run_conjugate(args, &cli.data),
        Commands::Search(args) => run_search(args, &cli.data),
        Commands::Auxiliary(args) => run_auxiliary(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
