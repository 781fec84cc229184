//! Comparison table content: header groups, per-entity rows and tooltips
//!
//! Rows are ragged: an entity only gets cells for the schema subfactors it
//! has a describable score for. Each cell carries its factor and subfactor
//! key so a renderer can line it up with the header.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::aggregate::AveragedEntity;
use crate::missing::{MissingKind, MissingMapping};
use crate::normalize::NormalizedEntity;
use crate::rubric::RubricView;
use crate::schema::LabelSchema;

/// A factor heading spanning its subfactor columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderGroup {
    pub label: String,
    pub span: usize,
}

/// Column identity, in schema order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub factor: String,
    pub subfactor: String,
    pub label: String,
}

/// Two-row header: factor groups, then subfactor columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableHeader {
    pub groups: Vec<HeaderGroup>,
    pub columns: Vec<Column>,
}

/// Averages summary shown on an entity's row heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    pub heading: String,
    pub lines: Vec<String>,
}

impl Tooltip {
    /// Heading and lines, one per line
    pub fn to_text(&self) -> String {
        std::iter::once(self.heading.as_str())
            .chain(self.lines.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One data cell: `"<normalized> (<raw>)"` plus the description of the raw score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub factor: String,
    pub subfactor: String,
    pub text: String,
    pub annotation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub entity: String,
    pub label: String,
    pub tooltip: Tooltip,
    pub cells: Vec<Cell>,
}

/// Derived rows plus the cells that could not be described
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableRows {
    pub rows: Vec<TableRow>,
    pub missing: Vec<MissingMapping>,
}

/// Header structure in schema order
pub fn table_header(schema: &LabelSchema) -> TableHeader {
    let groups = schema
        .factors
        .iter()
        .map(|f| HeaderGroup {
            label: f.label.clone(),
            span: f.items.len(),
        })
        .collect();
    let columns = schema
        .factors
        .iter()
        .flat_map(|f| {
            f.items.iter().map(move |s| Column {
                factor: f.key.clone(),
                subfactor: s.key.clone(),
                label: s.label.clone(),
            })
        })
        .collect();
    TableHeader { groups, columns }
}

/// Display text of one cell
pub fn cell_text(percent: u32, raw: u32) -> String {
    format!("{} ({})", percent, raw)
}

/// Averages tooltip for one entity; factors the schema does not label are left out
pub fn average_tooltip(schema: &LabelSchema, averaged: Option<&AveragedEntity>) -> Tooltip {
    let lines = averaged
        .map(|entity| {
            entity
                .factors
                .iter()
                .filter_map(|avg| {
                    schema
                        .factor(&avg.factor)
                        .map(|f| format!("{}: {}", f.label, avg.average))
                })
                .collect()
        })
        .unwrap_or_default();
    Tooltip {
        heading: schema.generic.average.clone(),
        lines,
    }
}

/// Derive one row per entity in entity order
pub fn derive_table_rows(
    view: &RubricView,
    normalized: &[NormalizedEntity],
    averaged: &[AveragedEntity],
) -> TableRows {
    let normalized: HashMap<&str, &NormalizedEntity> =
        normalized.iter().map(|n| (n.key.as_str(), n)).collect();
    let averaged: HashMap<&str, &AveragedEntity> =
        averaged.iter().map(|a| (a.key.as_str(), a)).collect();

    let mut missing = Vec::new();
    let mut rows = Vec::with_capacity(view.entities.len());

    for entity in view.entities {
        let tooltip = average_tooltip(view.schema, averaged.get(entity.key.as_str()).copied());
        let normalized_entity = normalized.get(entity.key.as_str()).copied();

        let mut cells = Vec::new();
        for factor in &view.schema.factors {
            for subfactor in &factor.items {
                let Some(raw) = entity.raw(&factor.key, &subfactor.key) else {
                    continue;
                };
                let Some(percent) = normalized_entity
                    .and_then(|n| n.score(&factor.key, &subfactor.key))
                    .map(|s| s.percent)
                else {
                    continue;
                };
                let Some(annotation) = subfactor.values.describe(raw) else {
                    missing.push(MissingMapping {
                        entity: entity.key.clone(),
                        factor: factor.key.clone(),
                        subfactor: Some(subfactor.key.clone()),
                        score: Some(raw),
                        kind: MissingKind::Description,
                    });
                    continue;
                };
                cells.push(Cell {
                    factor: factor.key.clone(),
                    subfactor: subfactor.key.clone(),
                    text: cell_text(percent, raw),
                    annotation: annotation.to_string(),
                });
            }
        }

        rows.push(TableRow {
            entity: entity.key.clone(),
            label: view.entity_label(&entity.key, &entity.label),
            tooltip,
            cells,
        });
    }

    debug!(rows = rows.len(), missing = missing.len(), "derive_table_rows");
    TableRows { rows, missing }
}
