//! Rubric documents: label schemas per language plus the rated entities
//!
//! A rubric is read from TOML, JSON or YAML (by file extension). The
//! built-in rubric compares open content types used in eLearning and ships
//! with English and Norwegian Bokmål labels.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::entity::Entity;
use crate::error::{RubricError, Result};
use crate::language::{Label, Language};
use crate::schema::LabelSchema;
use crate::{bail_rubric, bail_unsupported};

const BUILTIN_RUBRIC: &str = include_str!("../data/open-content.toml");

/// A complete rubric document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rubric {
    #[serde(default)]
    pub default_language: Language,
    pub languages: BTreeMap<Language, LabelSchema>,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

/// Supported rubric document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RubricFormat {
    Toml,
    Json,
    Yaml,
}

impl RubricFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "toml" => Ok(RubricFormat::Toml),
            "json" => Ok(RubricFormat::Json),
            "yaml" | "yml" => Ok(RubricFormat::Yaml),
            _ => bail_unsupported!(
                "rubric file extension",
                path.display(),
                "toml, json, yaml, yml"
            ),
        }
    }
}

impl Rubric {
    /// The rubric embedded in the library
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_RUBRIC, RubricFormat::Toml)
    }

    /// Load and validate a rubric file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RubricError::RubricNotFound {
                path: path.to_path_buf(),
            });
        }
        let format = RubricFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        let rubric = Self::parse(&content, format)?;
        debug!(
            path = %path.display(),
            languages = rubric.languages.len(),
            entities = rubric.entities.len(),
            "load_rubric"
        );
        Ok(rubric)
    }

    /// Parse and validate a rubric document
    pub fn parse(content: &str, format: RubricFormat) -> Result<Self> {
        let rubric: Rubric = match format {
            RubricFormat::Toml => toml::from_str(content)?,
            RubricFormat::Json => serde_json::from_str(content)?,
            RubricFormat::Yaml => serde_yaml::from_str(content)?,
        };
        rubric.validate()?;
        Ok(rubric)
    }

    /// Structural checks: default language present, unique keys everywhere
    pub fn validate(&self) -> Result<()> {
        if !self.languages.contains_key(&self.default_language) {
            bail_rubric!(
                "default language {} has no label schema",
                self.default_language
            );
        }
        for (language, schema) in &self.languages {
            schema.validate().map_err(|e| {
                RubricError::invalid_rubric(format!("{} (language {})", e, language))
            })?;
        }
        let mut keys = HashSet::new();
        for entity in &self.entities {
            if !keys.insert(entity.key.as_str()) {
                bail_rubric!("duplicate entity {}", entity.key);
            }
        }
        Ok(())
    }

    /// Available languages in code order
    pub fn languages(&self) -> impl Iterator<Item = &Language> {
        self.languages.keys()
    }

    /// Resolve a requested language code against the rubric.
    ///
    /// Unset, malformed or unknown codes select the default language.
    pub fn select_language(&self, requested: Option<&str>) -> Language {
        let Some(code) = requested.filter(|c| !c.trim().is_empty()) else {
            return self.default_language.clone();
        };
        match code.parse::<Language>() {
            Ok(language) if self.languages.contains_key(&language) => language,
            _ => {
                warn!(
                    requested = code,
                    fallback = %self.default_language,
                    "unsupported language, using default"
                );
                self.default_language.clone()
            }
        }
    }

    /// Freeze the rubric for one language
    pub fn view(&self, requested: Option<&str>) -> Result<RubricView<'_>> {
        let language = self.select_language(requested);
        let schema = self.languages.get(&language).ok_or_else(|| {
            RubricError::invalid_rubric(format!("no label schema for language {}", language))
        })?;
        Ok(RubricView {
            language,
            default_language: &self.default_language,
            schema,
            entities: &self.entities,
        })
    }
}

/// A rubric with its active language fixed; passed to every pipeline stage
#[derive(Debug, Clone)]
pub struct RubricView<'a> {
    pub language: Language,
    pub default_language: &'a Language,
    pub schema: &'a LabelSchema,
    pub entities: &'a [Entity],
}

impl<'a> RubricView<'a> {
    pub fn new(
        language: Language,
        default_language: &'a Language,
        schema: &'a LabelSchema,
        entities: &'a [Entity],
    ) -> Self {
        Self {
            language,
            default_language,
            schema,
            entities,
        }
    }

    /// An entity's label in the active language, falling back to its key
    pub fn entity_label(&self, entity_key: &str, label: &Label) -> String {
        label
            .resolve(&self.language, self.default_language)
            .unwrap_or(entity_key)
            .to_string()
    }
}
