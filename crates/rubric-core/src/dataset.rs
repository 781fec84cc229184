//! Radar chart data: axis labels, one dataset per entity, and the chart configuration

use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::aggregate::AveragedEntity;
use crate::error::{RubricError, Result};
use crate::rubric::RubricView;
use crate::schema::LabelSchema;

/// Upper bound of the radar scale; slightly above 100 so full scores stay visible
pub const DEFAULT_SCALE_MAX: u32 = 110;

/// One chart series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<u32>,
}

/// Axis labels with the datasets aligned to them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Factor labels in schema order
pub fn axis_labels(schema: &LabelSchema) -> Vec<String> {
    schema.factors.iter().map(|f| f.label.clone()).collect()
}

/// Build one dataset per entity, values in schema factor order.
///
/// A dataset that would not line up with the axes is an error.
pub fn assemble_datasets(view: &RubricView, averaged: &[AveragedEntity]) -> Result<Vec<Dataset>> {
    let expected = view.schema.factor_keys();

    let datasets = averaged
        .iter()
        .map(|entity| {
            let found = entity.factor_keys();
            if found != expected {
                return Err(RubricError::MisalignedDataset {
                    entity: entity.key.clone(),
                    expected: expected.join(", "),
                    found: found.join(", "),
                });
            }
            Ok(Dataset {
                label: view.entity_label(&entity.key, &entity.label),
                data: entity.values(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        language = %view.language,
        datasets = datasets.len(),
        axes = expected.len(),
        "assemble_datasets"
    );
    Ok(datasets)
}

/// Axes plus datasets for the active language
pub fn chart_data(view: &RubricView, averaged: &[AveragedEntity]) -> Result<ChartData> {
    Ok(ChartData {
        labels: axis_labels(view.schema),
        datasets: assemble_datasets(view, averaged)?,
    })
}

/// Radar chart configuration document for a Chart.js-style renderer
pub fn chart_config(data: &ChartData, scale_max: u32) -> Value {
    json!({
        "type": "radar",
        "data": data,
        "options": {
            "responsive": true,
            "maintainAspectRatio": true,
            "aspectRatio": 1,
            "legend": { "position": "top" },
            "scale": {
                "reverse": false,
                "ticks": {
                    "min": 0,
                    "max": scale_max,
                    "beginAtZero": true
                },
                "pointLabels": { "fontSize": 16 }
            }
        }
    })
}
