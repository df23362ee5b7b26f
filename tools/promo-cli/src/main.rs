//! Promo CLI - browse PromoHub catalog documents from the terminal.
//!
//! Commands:
//! - `promo browse` - Load a catalog file and print the filtered, sorted view
//! - `promo validate` - Parse a catalog file and report the count or the error
//! - `promo sample` - Print the sample catalog document, or write it to a file

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BrowseArgs, SampleArgs, ValidateArgs};

/// Browse, filter, and validate PromoHub catalog documents.
#[derive(Parser)]
#[command(name = "promo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output (includes core tracing events)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a catalog file and print the filtered, sorted view
    Browse(BrowseArgs),

    /// Parse a catalog file and report the record count or the error
    Validate(ValidateArgs),

    /// Print the sample catalog document, or write it to a file
    Sample(SampleArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    let output = output::Output::new(cli.verbose, cli.json);
    let config = config::load(cli.config.as_deref())?;

    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &config, &output),
        Commands::Validate(args) => commands::validate::run(args, &output),
        Commands::Sample(args) => commands::sample::run(args, &output),
    };

    if let Err(e) = result {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Route core tracing events to stderr. `-v` lowers the floor to debug;
/// `RUST_LOG` overrides both.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose {
        "promo_catalog=debug"
    } else {
        "promo_catalog=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
