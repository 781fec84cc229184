//! Language codes and localized labels

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RubricError;

/// Language used when a rubric does not name one
pub const DEFAULT_LANGUAGE: &str = "en";

/// A lowercase language code such as `en` or `nb`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Language(String);

impl Language {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Language(DEFAULT_LANGUAGE.to_string())
    }
}

impl FromStr for Language {
    type Err = RubricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        let valid = !code.is_empty()
            && code.len() <= 16
            && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            && !code.starts_with('-');
        if !valid {
            return Err(RubricError::invalid_value("language code", s));
        }
        Ok(Language(code))
    }
}

impl TryFrom<String> for Language {
    type Error = RubricError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(language: Language) -> String {
        language.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A display label that is either the same in every language or keyed by language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Text(String),
    Localized(BTreeMap<Language, String>),
}

impl Label {
    /// Resolve the label for `language`.
    ///
    /// Localized labels fall back to `fallback`, then to their first entry.
    /// Returns `None` only for an empty localized map.
    pub fn resolve(&self, language: &Language, fallback: &Language) -> Option<&str> {
        match self {
            Label::Text(text) => Some(text),
            Label::Localized(map) => map
                .get(language)
                .or_else(|| map.get(fallback))
                .or_else(|| map.values().next())
                .map(String::as_str),
        }
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Label::Text(text.to_string())
    }
}
