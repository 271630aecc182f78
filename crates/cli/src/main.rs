//! # cachedump
//!
//! Filters a resolver cache dump and prints it as a hosts file, a reloadable
//! cache dump or local-data directives.

mod bootstrap;
mod di;

use cachedump_domain::{CacheFilter, CliOverrides, OutputFormat};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

const FILTER_HELP: &str = "\
Filters are given in reverse polish notation, one token per -f:
  name:<regex>   owner name matches <regex> (unanchored)
  type:<TYPE>    record type is exactly <TYPE>, e.g. A, AAAA, MX
  ip:<regex>     address of an A/AAAA record matches <regex>
  and, or        combine the two topmost filters
  not            negate the topmost filter

Example: -f type:A -f type:AAAA -f or -f 'name:\\.example\\.com\\.$' -f and";

#[derive(Parser)]
#[command(name = "cachedump")]
#[command(version)]
#[command(about = "Filter and re-render an unbound cache dump")]
#[command(after_help = FILTER_HELP)]
struct Cli {
    /// Load a saved cache dump from FILE
    #[arg(short = 'l', long = "load", value_name = "FILE")]
    load: Option<PathBuf>,

    /// Write the output to FILE instead of stdout
    #[arg(short = 's', long = "save", value_name = "FILE")]
    save: Option<PathBuf>,

    /// Read a cache dump from stdin; with -l, stdin wins on collisions
    #[arg(short = 'r', long = "read")]
    read_stdin: bool,

    /// Output format: hosts, unbound_cache, unbound_local, unbound_local_remove
    #[arg(short = 'p', long = "print", value_name = "FORMAT")]
    format: Option<String>,

    /// Filter token, repeatable (see below)
    #[arg(
        short = 'f',
        long = "filter",
        value_name = "FILTER",
        allow_hyphen_values = true
    )]
    filters: Vec<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(
        cli.config.as_deref(),
        CliOverrides {
            log_level: cli.log_level,
            format: cli.format,
        },
    )?;
    bootstrap::init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        format = %config.output.format,
        "Configuration loaded"
    );

    let format: OutputFormat = config.output.format.parse()?;
    let filter = CacheFilter::from_specs(&cli.filters)?;

    let use_cases = di::UseCases::new(
        &di::IoPaths {
            load: cli.load,
            save: cli.save,
            read_stdin: cli.read_stdin,
        },
        &config,
    );

    let dump = use_cases.load_cache.execute()?;
    use_cases.export_cache.execute(&dump, &filter, format)?;

    Ok(())
}
