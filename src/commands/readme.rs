//! `rubric readme` - Markdown description of the rubric

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::command::CommandContext;
use rubric_core::error::Result;
use rubric_core::readme::generate_readme;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let rubric = ctx.load_rubric()?;
    let view = rubric.view(ctx.requested_language())?;
    let readme = generate_readme(view.schema);

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = json!({
                "language": view.language,
                "readme": readme,
            });
            ctx.emit(&serde_json::to_string_pretty(&output)?)
        }
        OutputFormat::Human => ctx.emit(&readme),
    }
}
