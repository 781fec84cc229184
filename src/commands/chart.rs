//! `rubric chart` - radar chart configuration

use crate::cli::{ChartArgs, OutputFormat};
use crate::commands::dispatch::command::CommandContext;
use crate::commands::dispatch::macros::trace_command;
use rubric_core::bail_usage;
use rubric_core::dataset::{chart_config, chart_data, ChartData};
use rubric_core::error::Result;
use rubric_core::pipeline::evaluate;

pub fn execute(ctx: &CommandContext, args: &ChartArgs) -> Result<()> {
    let scale_max = args.scale_max.unwrap_or(ctx.config.chart.scale_max);
    if scale_max == 0 {
        bail_usage!("--scale-max must be greater than zero");
    }

    let rubric = ctx.load_rubric()?;
    let view = rubric.view(ctx.requested_language())?;
    let evaluation = evaluate(&view, ctx.missing_policy())?;
    let data = chart_data(&view, &evaluation.averaged)?;
    trace_command!(ctx.cli, ctx.start, "chart_data");

    match ctx.cli.format {
        OutputFormat::Json => {
            let config = chart_config(&data, scale_max);
            ctx.emit(&serde_json::to_string_pretty(&config)?)
        }
        OutputFormat::Human => ctx.emit(&render_human(&data)),
    }
}

fn render_human(data: &ChartData) -> String {
    let mut out = format!("Axes: {}\n", data.labels.join(", "));
    for dataset in &data.datasets {
        let values: Vec<String> = dataset.data.iter().map(u32::to_string).collect();
        out.push_str(&format!("{}: {}\n", dataset.label, values.join(", ")));
    }
    out
}
