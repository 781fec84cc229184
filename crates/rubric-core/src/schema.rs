//! Label schema: factors, subfactors and the meaning of every legal score
//!
//! One schema exists per language. Factor and subfactor order is the order
//! they are declared in, and every derived view (chart axes, table columns,
//! README sections) follows it.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::bail_rubric;
use crate::error::Result;

/// Free-standing texts of a schema used by the README and table tooltips
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericText {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub usage: UsageText,
    /// Heading above the factor sections ("Factor")
    #[serde(default = "default_factor_heading")]
    pub factor: String,
    /// Heading of the averages tooltip ("Average")
    #[serde(default = "default_average_heading")]
    pub average: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageText {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

fn default_factor_heading() -> String {
    "Factor".to_string()
}

fn default_average_heading() -> String {
    "Average".to_string()
}

/// One legal score of a subfactor and what it means
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalePoint {
    pub score: u32,
    pub description: String,
}

/// Score → description mapping of one subfactor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ScalePoint>", into = "Vec<ScalePoint>")]
pub struct Scale(BTreeMap<u32, String>);

impl Scale {
    /// Highest legal score, `None` for an empty scale
    pub fn ceiling(&self) -> Option<u32> {
        self.0.keys().next_back().copied()
    }

    pub fn describe(&self, score: u32) -> Option<&str> {
        self.0.get(&score).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Scale points in ascending score order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.0.iter().map(|(score, text)| (*score, text.as_str()))
    }
}

impl TryFrom<Vec<ScalePoint>> for Scale {
    type Error = String;

    fn try_from(points: Vec<ScalePoint>) -> std::result::Result<Self, Self::Error> {
        let mut map = BTreeMap::new();
        for point in points {
            if map.insert(point.score, point.description).is_some() {
                return Err(format!("duplicate score {} in scale", point.score));
            }
        }
        Ok(Scale(map))
    }
}

impl From<Scale> for Vec<ScalePoint> {
    fn from(scale: Scale) -> Self {
        scale
            .0
            .into_iter()
            .map(|(score, description)| ScalePoint { score, description })
            .collect()
    }
}

impl<const N: usize> From<[(u32, &str); N]> for Scale {
    fn from(points: [(u32, &str); N]) -> Self {
        Scale(
            points
                .into_iter()
                .map(|(score, text)| (score, text.to_string()))
                .collect(),
        )
    }
}

/// A scored sub-criterion within a factor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subfactor {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub values: Scale,
}

/// A top-level evaluation dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factor {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub items: Vec<Subfactor>,
}

impl Factor {
    pub fn subfactor(&self, key: &str) -> Option<&Subfactor> {
        self.items.iter().find(|s| s.key == key)
    }
}

/// The catalog of factors of one language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSchema {
    #[serde(default)]
    pub generic: GenericText,
    #[serde(default)]
    pub factors: Vec<Factor>,
}

impl LabelSchema {
    pub fn factor(&self, key: &str) -> Option<&Factor> {
        self.factors.iter().find(|f| f.key == key)
    }

    /// The scale of `factor.subfactor`, if it exists and is not empty
    pub fn scale(&self, factor: &str, subfactor: &str) -> Option<&Scale> {
        self.factor(factor)?
            .subfactor(subfactor)
            .map(|s| &s.values)
            .filter(|scale| !scale.is_empty())
    }

    /// The description of one exact score
    pub fn describe(&self, factor: &str, subfactor: &str, score: u32) -> Option<&str> {
        self.scale(factor, subfactor)?.describe(score)
    }

    /// Factor keys in declaration order
    pub fn factor_keys(&self) -> Vec<&str> {
        self.factors.iter().map(|f| f.key.as_str()).collect()
    }

    /// Check that factor and subfactor keys are unique
    pub fn validate(&self) -> Result<()> {
        let mut factors = HashSet::new();
        for factor in &self.factors {
            if !factors.insert(factor.key.as_str()) {
                bail_rubric!("duplicate factor {}", factor.key);
            }
            let mut subfactors = HashSet::new();
            for subfactor in &factor.items {
                if !subfactors.insert(subfactor.key.as_str()) {
                    bail_rubric!("duplicate subfactor {}.{}", factor.key, subfactor.key);
                }
            }
        }
        Ok(())
    }
}
