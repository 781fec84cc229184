//! Subcommand routing

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{chart, languages, readme, scores, table};
use rubric_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Chart(args) => chart::execute(ctx, args),
            Commands::Table(args) => table::execute(ctx, args),
            Commands::Readme => readme::execute(ctx),
            Commands::Scores => scores::execute(ctx),
            Commands::Languages => languages::execute(ctx),
        }
    }
}
