//! Normalize → aggregate under a missing-mapping policy

use std::time::Instant;

use serde::Serialize;

use crate::aggregate::{aggregate, AveragedEntity};
use crate::error::Result;
use crate::language::Language;
use crate::missing::{MissingMapping, MissingPolicy};
use crate::normalize::{normalize, NormalizedEntity};
use crate::rubric::RubricView;
use crate::trace_time;

/// Every derived view of one rubric in one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub language: Language,
    pub normalized: Vec<NormalizedEntity>,
    pub averaged: Vec<AveragedEntity>,
    pub missing: Vec<MissingMapping>,
}

/// Run the scoring pipeline for `view`.
///
/// Omissions found while normalizing go through `policy` before averaging,
/// so `MissingPolicy::Fail` stops at the first unmapped score.
pub fn evaluate(view: &RubricView, policy: MissingPolicy) -> Result<Evaluation> {
    let start = Instant::now();

    let normalized = normalize(view.entities, view.schema)?;
    trace_time!(start, "normalize");
    policy.apply(&normalized.missing)?;

    let averaged = aggregate(&normalized.entities)?;
    trace_time!(start, "aggregate");

    Ok(Evaluation {
        language: view.language.clone(),
        normalized: normalized.entities,
        averaged,
        missing: normalized.missing,
    })
}
