//! Command dispatch logic for rubric

use std::time::Instant;

use crate::cli::Cli;
use rubric_core::config::RubricConfig;
use rubric_core::error::Result;
use tracing::debug;

pub mod command;
mod commands;
pub(crate) mod macros;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = RubricConfig::load_default()?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
