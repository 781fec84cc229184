//! `rubric scores` - factor averages per entity

use crate::cli::OutputFormat;
use crate::commands::dispatch::command::CommandContext;
use rubric_core::error::Result;
use rubric_core::pipeline::{evaluate, Evaluation};
use rubric_core::rubric::RubricView;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let rubric = ctx.load_rubric()?;
    let view = rubric.view(ctx.requested_language())?;
    let evaluation = evaluate(&view, ctx.missing_policy())?;

    match ctx.cli.format {
        OutputFormat::Json => ctx.emit(&serde_json::to_string_pretty(&evaluation)?),
        OutputFormat::Human => ctx.emit(&render_human(&view, &evaluation)),
    }
}

fn render_human(view: &RubricView, evaluation: &Evaluation) -> String {
    let mut out = String::new();
    for entity in &evaluation.averaged {
        out.push_str(&view.entity_label(&entity.key, &entity.label));
        out.push('\n');
        for average in &entity.factors {
            let label = view
                .schema
                .factor(&average.factor)
                .map_or(average.factor.as_str(), |f| f.label.as_str());
            out.push_str(&format!("  {}: {}\n", label, average.average));
        }
    }
    if !evaluation.missing.is_empty() {
        out.push_str(&format!("\n{} score(s) not in the rubric\n", evaluation.missing.len()));
    }
    out
}
