//! Rated content types and their raw scores

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::language::Label;

/// Raw scores: factor key → subfactor key → score
pub type RawScores = BTreeMap<String, BTreeMap<String, u32>>;

/// A content type being rated, e.g. text or video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub key: String,
    pub label: Label,
    #[serde(default)]
    pub scores: RawScores,
}

impl Entity {
    pub fn new(key: impl Into<String>, label: Label) -> Self {
        Self {
            key: key.into(),
            label,
            scores: RawScores::new(),
        }
    }

    /// Add a raw score, replacing any previous value for the cell
    pub fn with_score(mut self, factor: &str, subfactor: &str, score: u32) -> Self {
        self.scores
            .entry(factor.to_string())
            .or_default()
            .insert(subfactor.to_string(), score);
        self
    }

    pub fn raw(&self, factor: &str, subfactor: &str) -> Option<u32> {
        self.scores.get(factor)?.get(subfactor).copied()
    }
}
