//! `stylebook` command-line entry point.

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<String> {
    let mut catalog = stylebook::builtin::catalog();
    for path in &cli.stylesheets {
        let descriptors = stylebook::load_stylesheet(path)
            .with_context(|| format!("failed to load stylesheet {}", path.display()))?;
        let replaced = catalog.merge(descriptors);
        info!(path = %path.display(), replaced, "stylesheet applied");
    }
    stylebook::install(catalog)?;

    let catalog = stylebook::global();
    debug!(components = catalog.len(), "catalog ready");

    let mode = cli.output;
    match cli.command {
        Command::List => commands::list(catalog, mode),
        Command::Controls { component } => commands::controls_of(catalog, &component, mode),
        Command::Resolve {
            component,
            assignments,
            classes,
            preset,
        } => commands::resolve(
            catalog,
            &component,
            preset.as_deref(),
            &assignments,
            &classes,
            mode,
        ),
        Command::Stories { component } => commands::stories(catalog, &component, mode),
        Command::Render { template, data } => {
            commands::render(catalog, &template, data.as_deref())
        }
    }
}
