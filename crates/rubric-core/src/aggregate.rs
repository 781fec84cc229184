//! Per-factor averages of normalized scores

use serde::Serialize;
use tracing::debug;

use crate::error::{RubricError, Result};
use crate::language::Label;
use crate::normalize::{round_half_away, NormalizedEntity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactorAverage {
    pub factor: String,
    pub average: u32,
}

/// An entity's rounded mean per factor, in the order of its normalized factors
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AveragedEntity {
    pub key: String,
    pub label: Label,
    pub factors: Vec<FactorAverage>,
}

impl AveragedEntity {
    pub fn average(&self, factor: &str) -> Option<u32> {
        self.factors
            .iter()
            .find(|f| f.factor == factor)
            .map(|f| f.average)
    }

    pub fn factor_keys(&self) -> Vec<&str> {
        self.factors.iter().map(|f| f.factor.as_str()).collect()
    }

    pub fn values(&self) -> Vec<u32> {
        self.factors.iter().map(|f| f.average).collect()
    }
}

/// Rounded arithmetic mean, `None` for no values
pub fn mean_rounded(values: &[u32]) -> Option<u32> {
    if values.is_empty() {
        return None;
    }
    let sum: u64 = values.iter().map(|&v| u64::from(v)).sum();
    Some(round_half_away(sum as f64 / values.len() as f64))
}

/// Average every factor of every entity.
///
/// A factor without any normalized subfactor has no mean and is reported as
/// [`RubricError::EmptyFactor`].
pub fn aggregate(normalized: &[NormalizedEntity]) -> Result<Vec<AveragedEntity>> {
    let averaged = normalized
        .iter()
        .map(|entity| {
            let factors = entity
                .factors
                .iter()
                .map(|factor| {
                    let average = mean_rounded(&factor.percents()).ok_or_else(|| {
                        RubricError::EmptyFactor {
                            entity: entity.key.clone(),
                            factor: factor.key.clone(),
                        }
                    })?;
                    Ok(FactorAverage {
                        factor: factor.key.clone(),
                        average,
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            Ok(AveragedEntity {
                key: entity.key.clone(),
                label: entity.label.clone(),
                factors,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(entities = averaged.len(), "aggregate");
    Ok(averaged)
}
