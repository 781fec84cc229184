//! `rubric table` - comparison table of normalized scores

use serde_json::json;

use crate::cli::{OutputFormat, TableArgs};
use crate::commands::dispatch::command::CommandContext;
use crate::commands::dispatch::macros::trace_command;
use rubric_core::error::Result;
use rubric_core::html::render_table;
use rubric_core::pipeline::evaluate;
use rubric_core::table::{derive_table_rows, table_header};

pub fn execute(ctx: &CommandContext, args: &TableArgs) -> Result<()> {
    let rubric = ctx.load_rubric()?;
    let view = rubric.view(ctx.requested_language())?;
    let policy = ctx.missing_policy();
    let evaluation = evaluate(&view, policy)?;

    let header = table_header(view.schema);
    let table = derive_table_rows(&view, &evaluation.normalized, &evaluation.averaged);
    policy.apply(&table.missing)?;
    trace_command!(ctx.cli, ctx.start, "derive_table_rows");

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = json!({
                "language": view.language,
                "header": header,
                "rows": table.rows,
                "missing": table.missing,
            });
            ctx.emit(&serde_json::to_string_pretty(&output)?)
        }
        OutputFormat::Human => {
            let pad_rows = ctx.config.table.pad_rows && !args.ragged;
            ctx.emit(&render_table(&header, &table.rows, pad_rows))
        }
    }
}
