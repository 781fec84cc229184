//! Command trait and context for dispatching commands

use std::fs;
use std::io::Write;
use std::time::Instant;

use crate::cli::Cli;
use rubric_core::config::RubricConfig;
use rubric_core::error::Result;
use rubric_core::missing::MissingPolicy;
use rubric_core::rubric::Rubric;
use tracing::debug;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: RubricConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: RubricConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// The rubric named by `--rubric`, then by the config file, else the built-in one
    pub fn load_rubric(&self) -> Result<Rubric> {
        let rubric = match self.cli.rubric.as_ref().or(self.config.rubric.as_ref()) {
            Some(path) => Rubric::load(path)?,
            None => Rubric::builtin()?,
        };
        debug!(elapsed = ?self.start.elapsed(), "load_rubric");
        Ok(rubric)
    }

    /// Language code requested by flag or config; resolved later against the rubric
    pub fn requested_language(&self) -> Option<&str> {
        self.cli
            .lang
            .as_deref()
            .or(self.config.language.as_deref())
    }

    pub fn missing_policy(&self) -> MissingPolicy {
        self.cli.missing.unwrap_or(self.config.missing)
    }

    /// Write command output to `--output` or stdout, newline-terminated
    pub fn emit(&self, content: &str) -> Result<()> {
        let mut content = content.to_string();
        if !content.ends_with('\n') {
            content.push('\n');
        }

        match &self.cli.output {
            Some(path) => {
                if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                    fs::create_dir_all(dir)?;
                }
                fs::write(path, &content)?;
                debug!(path = %path.display(), bytes = content.len(), "write_output");
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(content.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("rubric {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("A multilingual evaluation rubric for open content.");
        println!();
        println!("Run `rubric --help` for usage information.");
        Ok(())
    }
}
