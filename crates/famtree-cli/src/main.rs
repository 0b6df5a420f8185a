//! # famtree
//!
//! Command-line front end for the famtree library: merge snapshots, edit a
//! snapshot file in place, check connectivity and render Graphviz DOT.
//!
//! ## Usage
//!
//! ```bash
//! famtree add-person tree.json --name Ada --gender female --birth 1815
//! famtree merge alice.json bob.json -o merged.json
//! famtree render merged.json -o tree.dot
//! famtree check merged.json
//! ```
//!
//! Log lines go to stderr. `RUST_LOG` overrides the default filter.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, LogFormat};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_format);

    match commands::execute(cli.command) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Install the tracing subscriber. Library `log` records are bridged in.
fn init_logging(verbose: bool, format: LogFormat) {
    let default = if verbose {
        "famtree=debug,famtree_cli=debug"
    } else {
        "famtree=info,famtree_cli=info"
    };
    let filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into());

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
