//! Skipped lookups and the policy applied to them
//!
//! Normalization and table derivation never fail on a lookup that finds
//! nothing. They record a [`MissingMapping`] instead, and the caller decides
//! what the omission means through a [`MissingPolicy`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{RubricError, Result};

/// Which link of the factor → subfactor → scale → description chain is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingKind {
    /// The schema has no such factor
    Factor,
    /// The factor has no such subfactor
    Subfactor,
    /// The subfactor has no score descriptions
    Scale,
    /// The scale has no description for the raw score
    Description,
}

impl fmt::Display for MissingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingKind::Factor => write!(f, "factor"),
            MissingKind::Subfactor => write!(f, "subfactor"),
            MissingKind::Scale => write!(f, "scale"),
            MissingKind::Description => write!(f, "description"),
        }
    }
}

/// One scored cell that was left out because the schema could not describe it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingMapping {
    pub entity: String,
    pub factor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subfactor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    pub kind: MissingKind,
}

impl fmt::Display for MissingMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has no {} for {}", self.entity, self.kind, self.factor)?;
        if let Some(subfactor) = &self.subfactor {
            write!(f, ".{}", subfactor)?;
        }
        if let Some(score) = self.score {
            write!(f, " = {}", score)?;
        }
        Ok(())
    }
}

/// What to do with recorded omissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingPolicy {
    /// Drop omissions silently
    Skip,
    /// Log every omission at warn level (default)
    #[default]
    Warn,
    /// Report the first omission as an error
    Fail,
}

impl MissingPolicy {
    /// Apply the policy to a batch of omissions
    pub fn apply(self, missing: &[MissingMapping]) -> Result<()> {
        match self {
            MissingPolicy::Skip => Ok(()),
            MissingPolicy::Warn => {
                for m in missing {
                    warn!(
                        entity = %m.entity,
                        factor = %m.factor,
                        subfactor = m.subfactor.as_deref().unwrap_or(""),
                        kind = %m.kind,
                        "skipping unmapped score"
                    );
                }
                Ok(())
            }
            MissingPolicy::Fail => match missing.first() {
                Some(m) => Err(RubricError::MissingMapping(m.clone())),
                None => Ok(()),
            },
        }
    }
}

impl FromStr for MissingPolicy {
    type Err = RubricError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(MissingPolicy::Skip),
            "warn" => Ok(MissingPolicy::Warn),
            "fail" => Ok(MissingPolicy::Fail),
            other => Err(RubricError::unsupported(
                "missing policy",
                other,
                "skip, warn, fail",
            )),
        }
    }
}

impl fmt::Display for MissingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingPolicy::Skip => write!(f, "skip"),
            MissingPolicy::Warn => write!(f, "warn"),
            MissingPolicy::Fail => write!(f, "fail"),
        }
    }
}
