//! Command handlers
//!
//! Each handler prints its result in the requested format and returns
//! whether the operation succeeded; `main` maps that to the exit status.

pub mod hosts;
pub mod list;
pub mod site;

use std::io;

use anyhow::Result;
use serde::Serialize;

use vhostctl::presentation::output;
use vhostctl::presentation::OutputFormat;
use vhostctl::Outcome;

pub(crate) fn emit_json(value: &impl Serialize) -> Result<()> {
    let mut out = io::stdout().lock();
    output::write_json(&mut out, value)?;
    Ok(())
}

/// Print an outcome and report its success
pub(crate) fn report(command: &str, outcome: &Outcome, format: OutputFormat) -> Result<bool> {
    match format {
        OutputFormat::Json => emit_json(&output::outcome_json(command, outcome))?,
        OutputFormat::Text if outcome.is_success() => print!("{}", output::render_outcome(outcome)),
        OutputFormat::Text => eprint!("{}", output::render_outcome(outcome)),
    }
    Ok(outcome.is_success())
}
