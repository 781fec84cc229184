//! `rubric languages` - languages the rubric is written in

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::command::CommandContext;
use rubric_core::error::Result;
use rubric_core::language::Language;
use rubric_core::rubric::Rubric;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let rubric = ctx.load_rubric()?;
    let selected = rubric.select_language(ctx.requested_language());

    match ctx.cli.format {
        OutputFormat::Json => {
            let languages: Vec<&Language> = rubric.languages().collect();
            let output = json!({
                "default": rubric.default_language,
                "selected": selected,
                "languages": languages,
            });
            ctx.emit(&serde_json::to_string_pretty(&output)?)
        }
        OutputFormat::Human => ctx.emit(&render_human(&rubric, &selected)),
    }
}

fn render_human(rubric: &Rubric, selected: &Language) -> String {
    let mut out = String::new();
    for language in rubric.languages() {
        let marker = if language == selected { "*" } else { " " };
        out.push_str(&format!("{} {}", marker, language));
        if *language == rubric.default_language {
            out.push_str(" (default)");
        }
        out.push('\n');
    }
    out
}
