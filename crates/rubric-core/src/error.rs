//! Error types and exit codes for rubric
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing rubric, invalid rubric, unusable scores)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::missing::MissingMapping;

/// Exit codes for the rubric CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or invalid rubric, unusable scores (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading or evaluating a rubric
#[derive(Error, Debug)]
pub enum RubricError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("rubric not found: {path:?}")]
    RubricNotFound { path: PathBuf },

    #[error("invalid rubric: {reason}")]
    InvalidRubric { reason: String },

    #[error("missing mapping: {0}")]
    MissingMapping(MissingMapping),

    #[error("scale for {factor}.{subfactor} has a ceiling of 0")]
    ZeroScale { factor: String, subfactor: String },

    #[error("entity {entity} has no scored subfactors for factor {factor}")]
    EmptyFactor { entity: String, factor: String },

    #[error("dataset for {entity} does not match chart axes (expected [{expected}], found [{found}])")]
    MisalignedDataset {
        entity: String,
        expected: String,
        found: String,
    },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl RubricError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RubricError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        RubricError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a rubric that fails a structural check
    pub fn invalid_rubric(reason: impl Into<String>) -> Self {
        RubricError::InvalidRubric {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RubricError::UsageError(_)
            | RubricError::InvalidValue { .. }
            | RubricError::Unsupported { .. } => ExitCode::Usage,

            RubricError::RubricNotFound { .. }
            | RubricError::InvalidRubric { .. }
            | RubricError::MissingMapping(_)
            | RubricError::ZeroScale { .. }
            | RubricError::EmptyFactor { .. }
            | RubricError::MisalignedDataset { .. } => ExitCode::Data,

            RubricError::Io(_)
            | RubricError::Yaml(_)
            | RubricError::Json(_)
            | RubricError::Toml(_)
            | RubricError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RubricError::UsageError(_) => "usage_error",
            RubricError::InvalidValue { .. } => "invalid_value",
            RubricError::Unsupported { .. } => "unsupported",
            RubricError::RubricNotFound { .. } => "rubric_not_found",
            RubricError::InvalidRubric { .. } => "invalid_rubric",
            RubricError::MissingMapping(_) => "missing_mapping",
            RubricError::ZeroScale { .. } => "zero_scale",
            RubricError::EmptyFactor { .. } => "empty_factor",
            RubricError::MisalignedDataset { .. } => "misaligned_dataset",
            RubricError::Io(_) => "io_error",
            RubricError::Yaml(_) => "yaml_error",
            RubricError::Json(_) => "json_error",
            RubricError::Toml(_) => "toml_error",
            RubricError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for rubric operations
pub type Result<T> = std::result::Result<T, RubricError>;
