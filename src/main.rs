//! Dwindle - bundle the scripts and stylesheets of a static site.

mod asset;
mod cli;
mod config;
mod html;
mod logger;
mod pipeline;
mod utils;

use std::process::ExitCode;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::DwindleConfig;
use owo_colors::OwoColorize;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "[error]".bright_red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    log!("dwindle"; "v{}", env!("CARGO_PKG_VERSION"));

    let config = DwindleConfig::load(cli)?;
    if let Some(path) = &config.config_path {
        debug!("config"; "loaded {}", path.display());
    }

    let result = pipeline::run(&config)?;
    cli::report(&result);
    Ok(())
}
