//! # Calculadora CLI
//!
//! Thin terminal front end over `calc_core`: parses one calculation from the
//! command line, runs it, and prints the result as text or JSON.

mod cli;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use calc_core::{load_settings, CalcSettings};

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let settings = match &cli.settings {
        Some(path) => load_settings(path).with_context(|| format!("loading settings from {}", path.display()))?,
        None => CalcSettings::default(),
    };

    let request = cli.command.into_request()?;
    let calc_type = request.calc_type();
    tracing::debug!(calc_type, "evaluating");

    match request.evaluate(&settings) {
        Ok(outcome) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                print!("{}", render::render(&outcome));
            }
            Ok(())
        }
        Err(e) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&e)?);
            }
            Err(e).with_context(|| format!("{} calculation failed", calc_type))
        }
    }
}
