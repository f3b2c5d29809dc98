//! Command-line interface module.

mod args;

pub use args::Cli;

use owo_colors::OwoColorize;

use crate::{log, pipeline::RunResult};

/// Print the end-of-run summary.
pub fn report(result: &RunResult) {
    for line in result.summary_lines() {
        log!("done"; "{}", line.green());
    }
}
