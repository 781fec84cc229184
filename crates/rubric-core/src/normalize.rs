//! Raw score → percentage of the subfactor's scale ceiling

use serde::Serialize;
use tracing::debug;

use crate::entity::Entity;
use crate::error::{RubricError, Result};
use crate::language::Label;
use crate::missing::{MissingKind, MissingMapping};
use crate::schema::LabelSchema;

/// One normalized cell; keeps the raw score it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedScore {
    pub subfactor: String,
    pub raw: u32,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedFactor {
    pub key: String,
    pub scores: Vec<NormalizedScore>,
}

impl NormalizedFactor {
    pub fn score(&self, subfactor: &str) -> Option<&NormalizedScore> {
        self.scores.iter().find(|s| s.subfactor == subfactor)
    }

    pub fn percents(&self) -> Vec<u32> {
        self.scores.iter().map(|s| s.percent).collect()
    }
}

/// An entity's scores restricted to schema-known cells, in schema order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedEntity {
    pub key: String,
    pub label: Label,
    pub factors: Vec<NormalizedFactor>,
}

impl NormalizedEntity {
    pub fn factor(&self, key: &str) -> Option<&NormalizedFactor> {
        self.factors.iter().find(|f| f.key == key)
    }

    pub fn score(&self, factor: &str, subfactor: &str) -> Option<&NormalizedScore> {
        self.factor(factor)?.score(subfactor)
    }
}

/// Normalizer output: the normalized entities and every cell that was left out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Normalized {
    pub entities: Vec<NormalizedEntity>,
    pub missing: Vec<MissingMapping>,
}

/// `round(value / ceiling * 100)`, or `None` when the ceiling is 0
pub fn percent_of(value: u32, ceiling: u32) -> Option<u32> {
    if ceiling == 0 {
        return None;
    }
    Some(round_half_away(f64::from(value) / f64::from(ceiling) * 100.0))
}

/// Round half away from zero; shared by normalization and aggregation
pub(crate) fn round_half_away(value: f64) -> u32 {
    value.round() as u32
}

/// Normalize every entity against `schema`
pub fn normalize(entities: &[Entity], schema: &LabelSchema) -> Result<Normalized> {
    let mut missing = Vec::new();
    let mut normalized = Vec::with_capacity(entities.len());

    for entity in entities {
        record_unknown_cells(entity, schema, &mut missing);

        let mut factors = Vec::new();
        for factor in &schema.factors {
            let Some(raw_scores) = entity.scores.get(&factor.key) else {
                continue;
            };

            let mut scores = Vec::new();
            for subfactor in &factor.items {
                let Some(&raw) = raw_scores.get(&subfactor.key) else {
                    continue;
                };
                let Some(ceiling) = subfactor.values.ceiling() else {
                    missing.push(MissingMapping {
                        entity: entity.key.clone(),
                        factor: factor.key.clone(),
                        subfactor: Some(subfactor.key.clone()),
                        score: Some(raw),
                        kind: MissingKind::Scale,
                    });
                    continue;
                };
                let percent = percent_of(raw, ceiling).ok_or_else(|| RubricError::ZeroScale {
                    factor: factor.key.clone(),
                    subfactor: subfactor.key.clone(),
                })?;
                scores.push(NormalizedScore {
                    subfactor: subfactor.key.clone(),
                    raw,
                    percent,
                });
            }

            factors.push(NormalizedFactor {
                key: factor.key.clone(),
                scores,
            });
        }

        normalized.push(NormalizedEntity {
            key: entity.key.clone(),
            label: entity.label.clone(),
            factors,
        });
    }

    debug!(
        entities = normalized.len(),
        missing = missing.len(),
        "normalize"
    );

    Ok(Normalized {
        entities: normalized,
        missing,
    })
}

/// Record raw cells whose factor or subfactor the schema does not know
fn record_unknown_cells(entity: &Entity, schema: &LabelSchema, missing: &mut Vec<MissingMapping>) {
    for (factor_key, raw_scores) in &entity.scores {
        let Some(factor) = schema.factor(factor_key) else {
            missing.push(MissingMapping {
                entity: entity.key.clone(),
                factor: factor_key.clone(),
                subfactor: None,
                score: None,
                kind: MissingKind::Factor,
            });
            continue;
        };
        for (subfactor_key, raw) in raw_scores {
            if factor.subfactor(subfactor_key).is_none() {
                missing.push(MissingMapping {
                    entity: entity.key.clone(),
                    factor: factor_key.clone(),
                    subfactor: Some(subfactor_key.clone()),
                    score: Some(*raw),
                    kind: MissingKind::Subfactor,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Factor, Scale, Subfactor};
    use proptest::prelude::*;

    fn subfactor(key: &str, scale: Scale) -> Subfactor {
        Subfactor {
            key: key.to_string(),
            label: key.to_string(),
            values: scale,
        }
    }

    fn schema() -> LabelSchema {
        LabelSchema {
            factors: vec![
                Factor {
                    key: "openness".to_string(),
                    label: "Openness".to_string(),
                    description: String::new(),
                    items: vec![
                        subfactor("materials", Scale::from([(0, "a"), (1, "b"), (2, "c"), (3, "d")])),
                        subfactor("tools", Scale::from([(0, "a"), (1, "b"), (2, "c")])),
                        subfactor("notes", Scale::default()),
                    ],
                },
                Factor {
                    key: "development".to_string(),
                    label: "Development".to_string(),
                    description: String::new(),
                    items: vec![subfactor(
                        "time",
                        Scale::from([(1, "a"), (2, "b"), (3, "c"), (4, "d"), (5, "e")]),
                    )],
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(2, 3), Some(67));
        assert_eq!(percent_of(3, 3), Some(100));
        assert_eq!(percent_of(1, 3), Some(33));
        assert_eq!(percent_of(1, 8), Some(13));
        assert_eq!(percent_of(0, 5), Some(0));
        assert_eq!(percent_of(4, 2), Some(200));
        assert_eq!(percent_of(1, 0), None);
    }

    #[test]
    fn test_normalize_in_schema_order() {
        let entity = Entity::new("text", Label::from("Text"))
            .with_score("development", "time", 1)
            .with_score("openness", "tools", 2)
            .with_score("openness", "materials", 2);

        let result = normalize(&[entity], &schema()).unwrap();
        assert!(result.missing.is_empty());

        let text = &result.entities[0];
        let keys: Vec<_> = text.factors.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["openness", "development"]);
        assert_eq!(text.factor("openness").unwrap().percents(), vec![67, 100]);
        assert_eq!(text.score("development", "time").unwrap().percent, 20);
        assert_eq!(text.score("openness", "materials").unwrap().raw, 2);
    }

    #[test]
    fn test_unknown_cells_are_skipped_and_recorded() {
        let entity = Entity::new("audio", Label::from("Audio"))
            .with_score("openness", "materials", 3)
            .with_score("openness", "licence", 1)
            .with_score("openness", "notes", 2)
            .with_score("reach", "audience", 4);

        let result = normalize(&[entity], &schema()).unwrap();
        let audio = &result.entities[0];
        assert_eq!(audio.factor("openness").unwrap().percents(), vec![100]);
        assert!(audio.factor("reach").is_none());

        let kinds: Vec<_> = result.missing.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![MissingKind::Subfactor, MissingKind::Factor, MissingKind::Scale]
        );
        assert_eq!(result.missing[0].subfactor.as_deref(), Some("licence"));
        assert_eq!(result.missing[1].factor, "reach");
        assert_eq!(result.missing[2].subfactor.as_deref(), Some("notes"));
    }

    #[test]
    fn test_zero_ceiling_is_an_error() {
        let mut schema = schema();
        schema.factors[0].items[0].values = Scale::from([(0, "Only value")]);
        let entity = Entity::new("text", Label::from("Text")).with_score("openness", "materials", 0);

        let err = normalize(&[entity], &schema).unwrap_err();
        assert!(matches!(err, RubricError::ZeroScale { .. }));
    }

    proptest! {
        #[test]
        fn prop_percent_within_bounds(ceiling in 1u32..=100, fraction in 0.0f64..=1.0) {
            let value = (f64::from(ceiling) * fraction).floor() as u32;
            let percent = percent_of(value, ceiling).unwrap();
            prop_assert!(percent <= 100);
            let expected = (f64::from(value) / f64::from(ceiling) * 100.0).round() as u32;
            prop_assert_eq!(percent, expected);
        }
    }
}
